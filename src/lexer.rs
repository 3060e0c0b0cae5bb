use crate::error::Error;
use crate::functions::{CONSTANTS, FUNCTIONS};
use crate::token::{Op, Token};
use std::iter::Peekable;
use std::str::Chars;

/// An helper struct for lexing the input
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(string: &'a str) -> Lexer<'a> {
        Lexer {
            input: string.chars().peekable(),
        }
    }

    /// Lex the whole input and reorder the tokens in reverse polish notation,
    /// using the shunting-yard algorithm.
    pub fn parse(&mut self) -> Result<Vec<Token>, Error> {
        let mut output = Vec::new();
        let mut operators = Vec::new();
        // true when the next token must start an operand
        let mut expect_operand = true;

        'tokens: while let Some(token) = self.next_token()? {
            match token {
                Token::Number(_) | Token::Constant(_) => {
                    if !expect_operand {
                        return Err(Error::ParseError(format!(
                            "missing operator before {}",
                            describe(&token)
                        )));
                    }
                    output.push(token);
                    expect_operand = false;
                }
                Token::Function(func) => {
                    if !expect_operand {
                        return Err(Error::ParseError(format!(
                            "missing operator before {}",
                            func
                        )));
                    }
                    if self.next_token()? != Some(Token::LParen) {
                        return Err(Error::ParseError(format!("expected '(' after {}", func)));
                    }
                    operators.push(token);
                    operators.push(Token::LParen);
                }
                Token::Op(o1) => {
                    if expect_operand {
                        let unary = o1.to_unary().ok_or_else(|| {
                            Error::ParseError(format!("missing operand before {}", describe(&token)))
                        })?;
                        // prefix operators have no left operand to reduce
                        operators.push(Token::Op(unary));
                        continue 'tokens;
                    }
                    'operators: while let Some(token) = operators.last().cloned() {
                        match token {
                            Token::Op(o2) => {
                                let pop_me =
                                    o1.is_left_associative() && o1.precedence() <= o2.precedence();
                                let pop_me = pop_me
                                    || o1.is_right_associative()
                                        && o1.precedence() < o2.precedence();
                                if pop_me {
                                    operators.pop();
                                    output.push(Token::Op(o2));
                                } else {
                                    break 'operators;
                                }
                            }
                            _ => break 'operators,
                        }
                    }
                    operators.push(Token::Op(o1));
                    expect_operand = true;
                }
                Token::LParen => {
                    if !expect_operand {
                        return Err(Error::ParseError("missing operator before '('".into()));
                    }
                    operators.push(token);
                }
                Token::RParen => {
                    if expect_operand {
                        return Err(Error::ParseError("missing operand before ')'".into()));
                    }
                    while let Some(token) = operators.pop() {
                        match token {
                            Token::LParen => {
                                if let Some(&Token::Function(_)) = operators.last() {
                                    output.extend(operators.pop());
                                }
                                continue 'tokens;
                            }
                            Token::Op(_) => output.push(token),
                            other => {
                                return Err(Error::ParseError(format!(
                                    "unexpected {} in operator stack",
                                    describe(&other)
                                )))
                            }
                        }
                    }
                    return Err(Error::ParseError("mismatched parenthesis".into()));
                }
            }
        }

        if expect_operand {
            return Err(Error::ParseError("unexpected end of expression".into()));
        }

        while let Some(token) = operators.pop() {
            match token {
                Token::Op(_) => output.push(token),
                _ => return Err(Error::ParseError("mismatched parenthesis".into())),
            }
        }
        Ok(output)
    }

    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        while let Some(&c) = self.input.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.input.next();
        }
        if let Some(c) = self.input.next() {
            let token = match c {
                c if is_number_part(c) => {
                    let mut literal = String::new();
                    literal.push(c);
                    while let Some(&c) = self.input.peek() {
                        if !is_number_part(c) {
                            break;
                        }
                        self.input.next();
                        literal.push(c);
                    }
                    let number = literal
                        .parse()
                        .map_err(|_| Error::ParseError(format!("invalid number {}", literal)))?;
                    Token::Number(number)
                }
                'π' => Token::Constant(crate::functions::Constant::Pi),
                c if c.is_ascii_alphabetic() => {
                    let mut ident = String::new();
                    ident.push(c);
                    while let Some(&c) = self.input.peek() {
                        if !c.is_ascii_alphabetic() {
                            break;
                        }
                        self.input.next();
                        ident.push(c);
                    }
                    if let Some(&func) = FUNCTIONS.get(ident.as_str()) {
                        Token::Function(func)
                    } else if let Some(&constant) = CONSTANTS.get(ident.as_str()) {
                        Token::Constant(constant)
                    } else {
                        return Err(Error::ParseError(format!("unknown name {}", ident)));
                    }
                }
                '+' => Token::Op(Op::Plus),
                '-' | '−' => Token::Op(Op::Minus),
                '*' | '×' => Token::Op(Op::Mul),
                '/' | '÷' => Token::Op(Op::Div),
                '%' => Token::Op(Op::Rem),
                '^' => Token::Op(Op::Exp),
                '(' => Token::LParen,
                ')' => Token::RParen,
                other => {
                    return Err(Error::ParseError(format!(
                        "unexpected character in input: {}",
                        other
                    )));
                }
            };
            Ok(Some(token))
        } else {
            Ok(None)
        }
    }
}

/// Check if `c` can appear inside a number literal
fn is_number_part(c: char) -> bool {
    c == '.' || c.is_ascii_digit()
}

fn describe(token: &Token) -> String {
    match token {
        Token::Number(value) => format!("number {}", value),
        Token::Constant(constant) => format!("constant {}", constant),
        Token::Function(func) => format!("function {}", func),
        Token::Op(op) => format!("operator {:?}", op),
        Token::LParen => "'('".into(),
        Token::RParen => "')'".into(),
    }
}
