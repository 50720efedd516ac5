use yardcalc::arithmetic_lexer;
use yardcalc::shunting::{build, BinOp, Expr, OpStack, StackItem};
use yardcalc::validation::validate;

fn sexpr(source: &str) -> String {
    let lexemes = arithmetic_lexer().lex(source).unwrap();
    validate(&lexemes).unwrap();
    build(&lexemes).to_string()
}

#[test]
fn test_shunting_precedence() {
    assert_eq!(sexpr("1"), "1");
    assert_eq!(sexpr("1+2"), "(+ 1 2)");
    assert_eq!(sexpr("1+2*3"), "(+ 1 (* 2 3))");
    assert_eq!(sexpr("1*2+3"), "(+ (* 1 2) 3)");
    assert_eq!(sexpr("2*3^2"), "(* 2 (^ 3 2))");
    assert_eq!(sexpr("1-2/3^4+5"), "(+ (- 1 (/ 2 (^ 3 4))) 5)");
}

#[test]
fn test_shunting_left_assoc() {
    assert_eq!(sexpr("1-2-3"), "(- (- 1 2) 3)");
    assert_eq!(sexpr("8/4/2"), "(/ (/ 8 4) 2)");
    assert_eq!(sexpr("1+2-3+4"), "(+ (- (+ 1 2) 3) 4)");
    // Exponentiation groups to the left too.
    assert_eq!(sexpr("2^3^2"), "(^ (^ 2 3) 2)");
}

#[test]
fn test_shunting_parens() {
    assert_eq!(sexpr("(1+2)*3"), "(* (+ 1 2) 3)");
    assert_eq!(sexpr("2^(3^2)"), "(^ 2 (^ 3 2))");
    assert_eq!(sexpr("((1))"), "1");
    assert_eq!(sexpr(" ( 1 + 2 ) * ( 3 - 4 ) "), "(* (+ 1 2) (- 3 4))");
}

#[test]
fn test_shunting_juxtaposition() {
    assert_eq!(sexpr("2(3+4)"), "(* 2 (+ 3 4))");
    assert_eq!(sexpr("2.5(4.0+2)"), "(* 2.5 (+ 4 2))");
    assert_eq!(sexpr("2 (3)"), "(* 2 3)");
    assert_eq!(sexpr("1+2(3)"), "(+ 1 (* 2 3))");
    // The implicit multiplication binds tighter than the operator before it.
    assert_eq!(sexpr("6/2(3)"), "(/ 6 (* 2 3))");
    assert_eq!(sexpr("2(3)^2"), "(* 2 (^ 3 2))");
}

#[test]
fn test_expr_eval() {
    let expr = Expr::binary(
        BinOp::Sub,
        Expr::binary(BinOp::Pow, Expr::Number(2.0), Expr::Number(10.0)),
        Expr::Number(24.0),
    );
    assert_eq!(expr.eval(), 1000.0);
    assert_eq!(expr.to_string(), "(- (^ 2 10) 24)");
    assert_eq!(
        expr.as_binary().map(|(op, _, _)| op),
        Some(BinOp::Sub)
    );

    let expr = Expr::binary(BinOp::Div, Expr::Number(1.0), Expr::Number(0.0));
    assert_eq!(expr.eval(), f64::INFINITY);
    let expr = Expr::binary(BinOp::Div, Expr::Number(0.0), Expr::Number(0.0));
    assert!(expr.eval().is_nan());
}

#[test]
fn test_op_stack() {
    assert!(BinOp::Pow.prec() > BinOp::Mul.prec());
    assert_eq!(BinOp::Mul.prec(), BinOp::Div.prec());
    assert!(BinOp::Div.prec() > BinOp::Add.prec());
    assert_eq!(BinOp::Add.prec(), BinOp::Sub.prec());

    let mut stack = OpStack::new();
    stack.push_op(BinOp::Add);
    stack.push_open_paren();
    stack.push_op(BinOp::Mul);
    assert_eq!(stack.pop_at_least(BinOp::Pow.prec()), None);
    assert_eq!(stack.pop_at_least(BinOp::Div.prec()), Some(BinOp::Mul));
    // Never pops past an open paren.
    assert_eq!(stack.pop_at_least(BinOp::Add.prec()), None);
    assert_eq!(stack.pop(), Some(StackItem::OpenParen));
    assert_eq!(stack.pop_at_least(BinOp::Sub.prec()), Some(BinOp::Add));
    assert_eq!(stack.pop(), None);
}
