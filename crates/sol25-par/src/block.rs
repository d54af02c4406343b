//! `block.rs` — block literals and statements
//! (`spec.md` §4.2 "Block", "Statement").

use sol25_util::{SolError, SolResult};

use sol25_lex::TokenKind;

use crate::ast::{Block, Parameter, Statement};
use crate::parser::Parser;

impl<'t> Parser<'t> {
    /// `Block := "[" (":" Identifier)* "|" Statement* "]"`.
    ///
    /// The separating `|` is mandatory even for a zero-parameter block.
    pub(crate) fn parse_block(&mut self) -> SolResult<Block> {
        self.expect(TokenKind::LBracket)?;

        let mut parameters = Vec::new();
        while self.peek().kind == TokenKind::Colon {
            parameters.push(self.parse_parameter()?);
        }
        self.expect(TokenKind::Pipe)?;

        let mut statements = Vec::new();
        while self.peek().kind != TokenKind::RBracket {
            statements.push(self.parse_statement()?);
        }
        self.expect(TokenKind::RBracket)?;

        let arity = parameters.len();
        Ok(Block { parameters, statements, arity })
    }

    /// `:` immediately followed by an `Identifier`, with no whitespace
    /// between them.
    fn parse_parameter(&mut self) -> SolResult<Parameter> {
        let colon = self.expect(TokenKind::Colon)?;
        let id_tok = self.peek();
        if id_tok.kind != TokenKind::Identifier {
            return Err(SolError::syntax(self.loc(), "expected a parameter name after ':'"));
        }
        let id_start_col = id_tok.column - id_tok.lexeme.as_str().len() as u32;
        if id_tok.line != colon.line || id_start_col != colon.column {
            return Err(SolError::syntax(
                self.loc(),
                "unexpected whitespace between ':' and parameter name",
            ));
        }
        self.advance();
        Ok(Parameter { name: id_tok.lexeme })
    }

    /// `Statement := Identifier ":=" Expr "."`.
    fn parse_statement(&mut self) -> SolResult<Statement> {
        let var_tok = self.expect(TokenKind::Identifier)?;
        self.expect(TokenKind::Assign)?;
        let expr = self.parse_expr()?;
        self.expect(TokenKind::Dot)?;
        Ok(Statement { var: var_tok.lexeme, expr })
    }
}
