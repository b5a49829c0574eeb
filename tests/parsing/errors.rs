#[cfg(test)]
mod rejection {
    use reckon::language::Expression;
    use reckon::parsing::parse;

    #[test]
    fn empty_input_is_rejected() {
        assert!(parse("").is_err());
    }

    #[test]
    fn nonsense_is_rejected() {
        assert!(parse("@").is_err());
        assert!(parse("+").is_err());
        assert!(parse("()").is_err());
    }

    #[test]
    fn last_alternative_failure_is_surfaced() {
        // All four expression alternatives fail on "@"; the reason the
        // caller sees belongs to the final one, the number literal,
        // whose digit run came up empty.
        let error = parse("@").unwrap_err();
        assert_eq!(error.reason, "at least one expected");
    }

    #[test]
    fn unbalanced_parentheses_fall_back_to_the_literal() {
        // "(1" never closes, so the whole grouping fails and the input
        // is rejected outright rather than half-consumed.
        assert!(parse("(1").is_err());
    }

    #[test]
    fn trailing_input_is_ignored() {
        // A dangling operator is not an error; the chain simply stops
        // before it and the leftovers are discarded by the entry point.
        assert_eq!(parse("1+"), Ok(Expression::Number(1.0)));
    }

    #[test]
    fn function_call_followed_by_operator_parses_as_the_call() {
        // Operands are parentheses or numbers only, so an expression
        // cannot continue after a call; the "+5" is left unconsumed.
        assert_eq!(
            parse("SUM(1,2)+5"),
            Ok(Expression::FunctionCall {
                name: String::from("SUM"),
                args: vec![Expression::Number(1.0), Expression::Number(2.0)],
            })
        );
    }

    #[test]
    fn incomplete_reference_is_rejected() {
        // Letters with no digits satisfy neither the reference nor any
        // other alternative.
        assert!(parse("ABC").is_err());
    }
}
