use super::*;

enum ASTPrinterMode {
    Stdout,
    Collect(Vec<String>),
}

pub struct ASTPrinter {
    indent: i32,
    mode: ASTPrinterMode,
}

impl ASTPrinter {
    pub fn new() -> ASTPrinter {
        ASTPrinter {
            indent: 0,
            mode: ASTPrinterMode::Stdout,
        }
    }

    pub fn collect() -> ASTPrinter {
        ASTPrinter {
            indent: 0,
            mode: ASTPrinterMode::Collect(Vec::new()),
        }
    }

    pub fn print(&mut self, program: &Program) {
        program.statements.iter().for_each(|s| s.accept(self));
    }

    pub fn collected(&self) -> &[String] {
        match &self.mode {
            ASTPrinterMode::Collect(collection) => &collection,
            _ => &[],
        }
    }

    fn write_ln(&mut self, line: &str) {
        let indent = if self.indent > 0 {
            (1..self.indent).map(|_| "|  ").collect::<String>() + "|--"
        } else {
            String::new()
        };

        let line = format!("{}{}", indent, line);

        match &mut self.mode {
            ASTPrinterMode::Stdout => println!("{}", line),
            ASTPrinterMode::Collect(collection) => collection.push(line),
        }
    }

    fn indent<T>(&mut self, block: T)
    where
        T: Fn(&mut ASTPrinter) -> (),
    {
        self.indent += 1;
        block(self);
        self.indent -= 1;
    }

    fn write_value(&mut self, value: &Option<Expr>) {
        match value {
            Some(value) => value.accept(self),
            None => self.write_ln("<skipped>"),
        }
    }
}

impl StmtVisitor for ASTPrinter {
    type StmtResult = ();

    fn visit_let_stmt(&mut self, name: &Identifier, value: &Option<Expr>) {
        self.write_ln(&format!("LetStmt(name: {})", name.value));
        self.indent(|visitor| visitor.write_value(value));
    }

    fn visit_return_stmt(&mut self, value: &Option<Expr>) {
        self.write_ln("ReturnStmt");
        self.indent(|visitor| visitor.write_value(value));
    }

    fn visit_expression_stmt(&mut self, expr: &Expr) {
        self.write_ln("ExpressionStmt");
        self.indent(|visitor| expr.accept(visitor));
    }
}

impl ExprVisitor for ASTPrinter {
    type ExprResult = ();

    fn visit_identifier_expr(&mut self, ident: &Identifier) {
        self.write_ln(&format!("Identifier({})", ident.value));
    }

    fn visit_integer_expr(&mut self, literal: &IntegerLiteral) {
        self.write_ln(&format!("IntegerLiteral({})", literal.value));
    }

    fn visit_prefix_expr(&mut self, operator: &str, right: &Expr) {
        self.write_ln(&format!("Prefix({})", operator));
        self.indent(|visitor| right.accept(visitor));
    }

    fn visit_infix_expr(&mut self, left: &Expr, operator: &str, right: &Expr) {
        self.write_ln(&format!("Infix({})", operator));
        self.indent(|visitor| {
            left.accept(visitor);
            right.accept(visitor);
        });
    }
}
