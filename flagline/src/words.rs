//! Shell-style word splitting for single flag lines.

use nom::branch::alt;
use nom::bytes::complete::take_while;
use nom::character::complete::anychar;
use nom::character::complete::char;
use nom::character::complete::multispace0;
use nom::character::complete::multispace1;
use nom::character::complete::none_of;
use nom::character::complete::one_of;
use nom::combinator::map;
use nom::multi::fold_many0;
use nom::multi::fold_many1;
use nom::multi::separated_list0;
use nom::sequence::delimited;
use nom::sequence::preceded;
use nom::IResult;

/// The reasons a flag line can fail to split into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A single or double quote was opened but never closed.
    #[error("unterminated {0} quote")]
    UnterminatedQuote(char),

    /// The line ends in the middle of a backslash escape.
    #[error("dangling escape at end of line")]
    DanglingEscape,

    /// A character that cannot start a word.
    #[error("unexpected character {0:?}")]
    Unexpected(char),
}

/// Split a line into words following POSIX shell quoting rules.
///
/// Words are separated by unquoted whitespace. Single quotes preserve their
/// contents literally, double quotes allow `\"` and `\\` escapes, and an
/// unquoted backslash escapes the following character. Adjacent quoted and
/// unquoted segments form a single word.
pub fn split(line: &str) -> Result<Vec<String>, ParseError> {
    let parsed: IResult<&str, Vec<String>> = delimited(
        multispace0,
        separated_list0(multispace1, word),
        multispace0,
    )(line);

    match parsed {
        Ok(("", words)) => Ok(words),
        Ok((rest, _)) => Err(remainder_error(rest)),
        Err(_) => Err(remainder_error(line)),
    }
}

fn remainder_error(rest: &str) -> ParseError {
    match rest.chars().next() {
        Some(quote @ ('\'' | '"')) => ParseError::UnterminatedQuote(quote),
        Some('\\') => ParseError::DanglingEscape,
        Some(other) => ParseError::Unexpected(other),
        // `split` only classifies a non-empty remainder.
        None => ParseError::Unexpected('\0'),
    }
}

fn word(input: &str) -> IResult<&str, String> {
    fold_many1(
        alt((single_quoted, double_quoted, unquoted)),
        String::new,
        |mut acc, piece| {
            acc.push_str(&piece);
            acc
        },
    )(input)
}

fn single_quoted(input: &str) -> IResult<&str, String> {
    map(
        delimited(char('\''), take_while(|c| c != '\''), char('\'')),
        str::to_owned,
    )(input)
}

fn double_quoted(input: &str) -> IResult<&str, String> {
    delimited(
        char('"'),
        fold_many0(
            alt((preceded(char('\\'), one_of("\\\"")), none_of("\""))),
            String::new,
            |mut acc, c| {
                acc.push(c);
                acc
            },
        ),
        char('"'),
    )(input)
}

fn unquoted(input: &str) -> IResult<&str, String> {
    fold_many1(
        alt((preceded(char('\\'), anychar), none_of(" \t\r\n'\"\\"))),
        String::new,
        |mut acc, c| {
            acc.push(c);
            acc
        },
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<String> {
        split(line).expect("line splits cleanly")
    }

    #[test]
    fn plain_words_are_split_on_whitespace() {
        assert_eq!(words("-I/usr/include/libxml2"), ["-I/usr/include/libxml2"]);
        assert_eq!(
            words("-L/usr/lib -lxml2 -lz -llzma -lm"),
            ["-L/usr/lib", "-lxml2", "-lz", "-llzma", "-lm"]
        );
    }

    #[test]
    fn surrounding_and_repeated_whitespace_is_ignored() {
        assert_eq!(words("  -lm \t -lpthread \n"), ["-lm", "-lpthread"]);
        assert_eq!(words(""), Vec::<String>::new());
        assert_eq!(words("   "), Vec::<String>::new());
    }

    #[test]
    fn single_quotes_preserve_contents() {
        assert_eq!(words("'-I/opt/My Tools/include'"), ["-I/opt/My Tools/include"]);
        assert_eq!(words("'a \"b\" c'"), ["a \"b\" c"]);
    }

    #[test]
    fn double_quotes_allow_escapes() {
        assert_eq!(words(r#""-DNAME=\"value\"""#), [r#"-DNAME="value""#]);
        assert_eq!(words(r#""back\\slash""#), [r"back\slash"]);
        // A backslash before a regular character stays literal.
        assert_eq!(words(r#""a\b""#), [r"a\b"]);
    }

    #[test]
    fn unquoted_backslash_escapes_the_next_character() {
        assert_eq!(words(r"-I/opt/My\ Tools/include"), ["-I/opt/My Tools/include"]);
        assert_eq!(words(r"a\'b"), ["a'b"]);
    }

    #[test]
    fn adjacent_segments_join_into_one_word() {
        assert_eq!(words(r#"-I"/opt/xml"/include"#), ["-I/opt/xml/include"]);
        assert_eq!(words("a''b"), ["ab"]);
    }

    #[test]
    fn empty_quotes_make_an_empty_word() {
        assert_eq!(words("a '' b"), ["a", "", "b"]);
    }

    #[test]
    fn unterminated_quotes_are_reported() {
        assert_eq!(split("'abc"), Err(ParseError::UnterminatedQuote('\'')));
        assert_eq!(split(r#"abc"def"#), Err(ParseError::UnterminatedQuote('"')));
    }

    #[test]
    fn dangling_escape_is_reported() {
        assert_eq!(split(r"abc\"), Err(ParseError::DanglingEscape));
    }
}
