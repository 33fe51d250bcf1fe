use lazy_static::lazy_static;
use regex::Regex;

#[derive(Debug, PartialEq)]
pub enum Token<'text> {
    Keyword(&'text str),
    Value(&'text str),
}

impl<'text> Token<'text> {
    pub fn text(&self) -> &'text str {
        match self {
            Token::Keyword(text) | Token::Value(text) => text,
        }
    }
}

lazy_static! {
    static ref KEYWORD_REGEX: Regex = Regex::new(r#"(?i)^(exit|quit|help|h|\?)$"#).unwrap();
    static ref WORD_REGEX: Regex = Regex::new(r#"^\S+"#).unwrap();
}

pub fn lex(text: &str) -> Vec<Token> {
    let mut tokens = vec![];
    let mut pos = 0;

    loop {
        match text[pos..].find(|c: char| !c.is_whitespace()) {
            Some(offset) => pos += offset,
            None => break,
        }

        let Some((token, next_pos)) = lex_token(text, pos) else {
            break;
        };
        tokens.push(token);
        pos = next_pos;
    }

    tokens
}

fn lex_token(text: &str, pos: usize) -> Option<(Token, usize)> {
    let (word, pos) = lex_with_pattern(text, pos, &WORD_REGEX)?;

    match KEYWORD_REGEX.is_match(word) {
        true => Some((Token::Keyword(word), pos)),
        false => Some((Token::Value(word), pos)),
    }
}

fn lex_with_pattern<'text>(
    text: &'text str,
    pos: usize,
    pat: &Regex,
) -> Option<(&'text str, usize)> {
    if let Some(slice) = text.get(pos..text.len()) {
        if let Some(m) = pat.find(slice) {
            assert!(
                m.start() == 0,
                "put caret ^ to match the text from the `pos` (text is sliced to start from pos)"
            );
            return Some((m.as_str(), pos + m.end()));
        }
    }

    None
}

#[cfg(test)]
mod tests {

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all() {
        let src = "
        exit quit help h ?
        EXIT Help
        add + plus  sub\t-  minus mul * x times div / divide
        2 -3.5 1e10 abc hello ??
        ";

        use Token::*;

        assert_eq!(
            vec![
                Keyword("exit"),
                Keyword("quit"),
                Keyword("help"),
                Keyword("h"),
                Keyword("?"),
                Keyword("EXIT"),
                Keyword("Help"),
                Value("add"),
                Value("+"),
                Value("plus"),
                Value("sub"),
                Value("-"),
                Value("minus"),
                Value("mul"),
                Value("*"),
                Value("x"),
                Value("times"),
                Value("div"),
                Value("/"),
                Value("divide"),
                Value("2"),
                Value("-3.5"),
                Value("1e10"),
                Value("abc"),
                Value("hello"),
                Value("??"),
            ],
            lex(src)
        );
    }

    #[test]
    fn test_blank() {
        assert_eq!(lex(""), Vec::<Token>::new());
        assert_eq!(lex("   \t  "), Vec::<Token>::new());
    }

    #[test]
    fn test_keyword_must_be_whole_word() {
        use Token::*;

        assert_eq!(lex("hx exits quitter"), vec![Value("hx"), Value("exits"), Value("quitter")]);
    }

    #[test]
    fn test_text() {
        assert_eq!(Token::Keyword("quit").text(), "quit");
        assert_eq!(Token::Value("42").text(), "42");
    }
}
