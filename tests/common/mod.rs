pub use monkey::diagnostic::*;
use std::cell::RefCell;
use std::rc::Rc;

pub type TestResult = std::result::Result<(), String>;

#[allow(dead_code)]
pub mod test_token {

    use monkey::lexing::*;

    pub fn test(kind: TokenKind, text: &str) -> Token {
        Token::new(kind, text)
    }

    pub fn ident(name: &str) -> Token {
        test(TokenKind::Identifier, name)
    }

    pub fn int(digits: &str) -> Token {
        test(TokenKind::Int, digits)
    }

    pub fn five() -> Token {
        int("5")
    }

    pub fn ten() -> Token {
        int("10")
    }

    pub fn plus() -> Token {
        test(TokenKind::Plus, "+")
    }

    pub fn minus() -> Token {
        test(TokenKind::Minus, "-")
    }

    pub fn star() -> Token {
        test(TokenKind::Star, "*")
    }

    pub fn bang() -> Token {
        test(TokenKind::Bang, "!")
    }

    pub fn assign() -> Token {
        test(TokenKind::Assign, "=")
    }

    pub fn semicolon() -> Token {
        test(TokenKind::Semicolon, ";")
    }

    pub fn let_keyword() -> Token {
        test(TokenKind::Let, "let")
    }

    pub fn return_keyword() -> Token {
        test(TokenKind::Return, "return")
    }

    pub fn eof() -> Token {
        test(TokenKind::EOF, "")
    }
}

#[allow(dead_code)]
pub mod test_parse {

    use monkey::diagnostic::Diagnostic;
    use monkey::parsing::*;

    pub fn parse(text: &str) -> (Program, Vec<Diagnostic>) {
        monkey::parsing::parse(&monkey::source::text(text))
    }

    /// Parses `text`, failing with the collected messages if any diagnostic was produced.
    pub fn parse_success(text: &str) -> Result<Program, String> {
        let (program, diagnostics) = parse(text);
        if diagnostics.is_empty() {
            Ok(program)
        } else {
            let messages: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
            Err(format!(
                "parser has {} errors:\n  {}",
                diagnostics.len(),
                messages.join("\n  ")
            ))
        }
    }

    pub fn single_expression(text: &str) -> Result<Expr, String> {
        let program = parse_success(text)?;
        if program.statements.len() != 1 {
            return Err(format!(
                "Expected 1 statement, got {}",
                program.statements.len()
            ));
        }
        match program.statements.into_iter().next() {
            Some(Stmt::Expression(stmt)) => Ok(stmt.expression),
            _ => Err(String::from("Expected an expression statement")),
        }
    }
}

pub struct DiagnosticCapture {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

impl DiagnosticCapture {
    pub fn unwrap(&mut self) -> Vec<Diagnostic> {
        let captured = RefCell::new(Vec::new());
        self.diagnostics.swap(&captured);
        captured.into_inner()
    }
}

pub struct TestReporter {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

impl TestReporter {
    #[allow(dead_code)]
    pub fn new() -> (Rc<dyn Reporter>, DiagnosticCapture) {
        let diagnostics = Rc::new(RefCell::new(Vec::new()));
        (
            Rc::new(TestReporter {
                diagnostics: Rc::clone(&diagnostics),
            }),
            DiagnosticCapture { diagnostics },
        )
    }
}

impl Reporter for TestReporter {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}

#[allow(dead_code)]
pub fn assert_slices_equal<T, U>(
    kind: &str,
    got: &[T],
    expected: &[T],
    test: U,
    list: &str,
) -> TestResult
where
    T: std::fmt::Display,
    U: Fn(&T, &T) -> bool,
{
    if got.len() != expected.len() {
        let one_line = format!("Expected {} {}, got {}", expected.len(), kind, got.len());
        println!("{}\n{}", &one_line, list);
        return Err(one_line);
    }

    for (lhs, rhs) in got.iter().zip(expected) {
        if !test(lhs, rhs) {
            println!("Expected:\n  {}\nGot:\n  {}", rhs, lhs);
            return Err(String::from("Unexpected item"));
        }
    }

    Ok(())
}
