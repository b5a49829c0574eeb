//! A run-length codec built on the combinator engine, exercising the
//! chain! sugar for dependent parse steps: the decoder cannot know how
//! many characters to take until it has read the count.

#[cfg(test)]
mod roundtrip {
    use reckon::chain;
    use reckon::parsing::combinators::{
        char, consume, many0, map, nat, run, satisfy, success, ParseResult,
    };

    /// Encode runs of identical characters as count-then-character.
    fn encode(input: &str) -> ParseResult<'_, String> {
        let encoded_run = chain! {
            head <- satisfy(|_| true);
            more <- many0(char(head));
            success(format!("{}{}", more.len() + 1, head))
        };
        map(many0(encoded_run), |chunks: Vec<String>| chunks.concat())(input)
    }

    /// The inverse: read a count, then repeat the next character.
    fn decode(input: &str) -> ParseResult<'_, String> {
        let decoded_run = chain! {
            count <- nat;
            glyph <- consume(1);
            success(glyph.repeat(count as usize))
        };
        map(many0(decoded_run), |chunks: Vec<String>| chunks.concat())(input)
    }

    #[test]
    fn encoding() {
        assert_eq!(encode("WWWaaBBBBBc"), Ok((String::from("3W2a5B1c"), "")));
        assert_eq!(encode(""), Ok((String::from(""), "")));
    }

    #[test]
    fn decoding() {
        assert_eq!(decode("3W2a5B1c"), Ok((String::from("WWWaaBBBBBc"), "")));
    }

    #[test]
    fn decoding_stops_at_unencodable_text() {
        assert_eq!(
            decode("3W2a5B1cABC"),
            Ok((String::from("WWWaaBBBBBc"), "ABC"))
        );
    }

    #[test]
    fn decode_inverts_encode() {
        for text in ["WWWaaBBBBBc", "abc", "aaaaaaaaa", "x", ""] {
            let encoded = run(encode, text).unwrap();
            assert_eq!(run(decode, &encoded), Ok(String::from(text)));
        }
    }
}
