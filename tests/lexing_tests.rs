use yardcalc::lexing::{lexeme_span, Cursor, LexError, Lexer, LexerBuilder};
use yardcalc::{arithmetic_lexer, Tok};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
enum TokenThatHatesYou {
    Colon,
    DoubleColon,
    AB,
    A,
    Word,
    Digits,
    Space,
}

fn lex_arith(source: &str) -> Vec<(Tok, &str)> {
    arithmetic_lexer()
        .lex(source)
        .unwrap()
        .into_iter()
        .map(|lex| (lex.token, lex.text))
        .collect()
}

fn show<'s>(lexer: &Lexer<TokenThatHatesYou>, source: &'s str) -> Vec<&'s str> {
    lexer
        .lex(source)
        .unwrap()
        .into_iter()
        .map(|lex| lex.text)
        .collect()
}

#[test]
fn test_lexing_arithmetic() {
    use Tok::*;

    assert_eq!(lex_arith(""), vec![]);
    assert_eq!(lex_arith("123456789"), vec![(Number, "123456789")]);
    assert_eq!(
        lex_arith("  1  "),
        vec![(Space, "  "), (Number, "1"), (Space, "  ")]
    );
    assert_eq!(
        lex_arith("+-*/^()"),
        vec![
            (Add, "+"),
            (Sub, "-"),
            (Mul, "*"),
            (Div, "/"),
            (Pow, "^"),
            (LParen, "("),
            (RParen, ")")
        ]
    );
    assert_eq!(
        lex_arith("7-7/7+7*14"),
        vec![
            (Number, "7"),
            (Sub, "-"),
            (Number, "7"),
            (Div, "/"),
            (Number, "7"),
            (Add, "+"),
            (Number, "7"),
            (Mul, "*"),
            (Number, "14")
        ]
    );
    assert_eq!(
        lex_arith("(2+2.22)"),
        vec![
            (LParen, "("),
            (Number, "2"),
            (Add, "+"),
            (Number, "2.22"),
            (RParen, ")")
        ]
    );
    assert_eq!(lex_arith("\t\n 2"), vec![(Space, "\t\n "), (Number, "2")]);
}

#[test]
fn test_lexing_trailing_dot() {
    use Tok::*;

    assert_eq!(
        lex_arith("123.456+5."),
        vec![(Number, "123.456"), (Add, "+"), (Number, "5.")]
    );
    assert_eq!(
        lex_arith("5.(1)"),
        vec![(Number, "5."), (LParen, "("), (Number, "1"), (RParen, ")")]
    );
}

#[test]
fn test_lexing_unknown_symbol() {
    let lexer = arithmetic_lexer();
    let err = lexer.lex("5+&").unwrap_err();
    assert_eq!(
        err,
        LexError::UnknownSymbol {
            symbol: '&',
            offset: 2
        }
    );
    assert_eq!(err.span(), (2, 3));

    // A leading dot is not a number.
    let err = lexer.lex("1 + .5").unwrap_err();
    assert_eq!(err.span(), (4, 5));

    let err = lexer.lex("2λ").unwrap_err();
    assert_eq!(err.span(), (1, 3));

    // The iterator stops after the first error.
    let results = lexer.lex_iter("1#2#").collect::<Vec<_>>();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
}

#[test]
fn test_lexing_is_lossless() {
    let lexer = arithmetic_lexer();
    for source in ["", " 1 + 2 ", "2.5(4.0+2)", "((3))\n*\t4.", "1+)", "*5+4", "(5"] {
        let lexemes = lexer.lex(source).unwrap();
        let text = lexemes.iter().map(|lex| lex.text).collect::<String>();
        assert_eq!(text, source);
    }
}

#[test]
fn test_lexeme_span() {
    let lexer = arithmetic_lexer();
    let lexemes = lexer.lex(" 12 + 3.5").unwrap();
    assert_eq!(lexeme_span(&lexemes, 0), (0, 1));
    assert_eq!(lexeme_span(&lexemes, 1), (1, 3));
    assert_eq!(lexeme_span(&lexemes, 3), (4, 5));
    assert_eq!(lexeme_span(&lexemes, 5), (6, 9));
}

#[test]
fn test_lexing_first_pattern_wins() {
    use TokenThatHatesYou::*;

    let lexer = LexerBuilder::new()
        .string(":", Colon)
        .string("::", DoubleColon)
        .regex(" +", Space)
        .build()
        .unwrap();
    assert_eq!(show(&lexer, "::"), vec![":", ":"]);

    let lexer = LexerBuilder::new()
        .string("::", DoubleColon)
        .string(":", Colon)
        .regex(" +", Space)
        .build()
        .unwrap();
    assert_eq!(show(&lexer, ":::"), vec!["::", ":"]);
    assert_eq!(show(&lexer, ": ::"), vec![":", " ", "::"]);
}

#[test]
fn test_lexing_regexes() {
    use TokenThatHatesYou::*;

    let lexer = LexerBuilder::new()
        // Matches the empty string everywhere; those matches are ignored.
        .regex("[0-9]*", Digits)
        .regex("[a-z]+", Word)
        .regex("[ \\t]+", Space)
        .string("(", Colon)
        .build()
        .unwrap();
    let lexemes = lexer.lex("ab12 (cd").unwrap();
    let tokens = lexemes.iter().map(|lex| lex.token).collect::<Vec<_>>();
    assert_eq!(tokens, vec![Word, Digits, Space, Colon, Word]);

    // Special characters in strings are literal.
    assert!(lexer.lex("ab12[").is_err());

    let err = LexerBuilder::<TokenThatHatesYou>::new()
        .regex("[a-", Word)
        .build();
    assert!(err.is_err());
}

#[test]
fn test_lexing_matcher_that_gives_up() {
    use TokenThatHatesYou::*;

    // Reads an 'a', then fails if there is no 'b'. It never rewinds.
    fn match_ab(cursor: &mut Cursor) -> bool {
        cursor.eat_char('a') && cursor.eat_char('b')
    }

    let lexer = LexerBuilder::new()
        .matcher(match_ab, AB)
        .string("a", A)
        .string("c", Word)
        .build()
        .unwrap();
    let lexemes = lexer.lex("abacab").unwrap();
    let tokens = lexemes.iter().map(|lex| lex.token).collect::<Vec<_>>();
    assert_eq!(tokens, vec![AB, A, Word, AB]);

    // A matcher that gives up must not swallow the character for the next pattern.
    let lexer = LexerBuilder::new().matcher(match_ab, AB).build().unwrap();
    let err = lexer.lex("ab+").unwrap_err();
    assert_eq!(
        err,
        LexError::UnknownSymbol {
            symbol: '+',
            offset: 2
        }
    );
    let err = lexer.lex("ac").unwrap_err();
    assert_eq!(
        err,
        LexError::UnknownSymbol {
            symbol: 'a',
            offset: 0
        }
    );
}

#[test]
fn test_lexing_matcher_that_matches_nothing() {
    use TokenThatHatesYou::*;

    fn match_nothing(_cursor: &mut Cursor) -> bool {
        true
    }

    let lexer = LexerBuilder::new()
        .matcher(match_nothing, Word)
        .string("a", A)
        .build()
        .unwrap();
    let lexemes = lexer.lex("aa").unwrap();
    let tokens = lexemes.iter().map(|lex| lex.token).collect::<Vec<_>>();
    assert_eq!(tokens, vec![A, A]);
}
