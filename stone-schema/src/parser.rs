//! Recursive descent parser for TypeScript model declarations.
//!
//! Only the declaration subset found in model files is understood:
//! `import` statements (skipped), interfaces, type aliases and enums.

use crate::{
    Result,
    ast::{Declaration, DeclarationKind, Module, Property, Span, TypeExpr},
    error::SourceContext,
    lexer::{SpannedToken, Token, lex},
};

/// Parse a model source into a [`Module`].
pub fn parse_module(ctx: &SourceContext) -> Result<Module> {
    let tokens = lex(ctx.src()).map_err(|e| ctx.lex_error(e.message, e.span))?;
    Parser::new(ctx, tokens).parse()
}

struct Parser<'a> {
    ctx: &'a SourceContext,
    tokens: Vec<SpannedToken>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(ctx: &'a SourceContext, tokens: Vec<SpannedToken>) -> Self {
        Self {
            ctx,
            tokens,
            pos: 0,
        }
    }

    fn current(&self) -> Option<&SpannedToken> {
        self.tokens.get(self.pos)
    }

    fn current_token(&self) -> Option<&Token> {
        self.current().map(|st| &st.token)
    }

    fn peek_token(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset).map(|st| &st.token)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// End offset of the previously consumed token.
    fn last_end(&self) -> usize {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|st| st.span.end)
            .unwrap_or(0)
    }

    fn error_here(&self, expected: &str) -> Box<crate::Error> {
        match self.current() {
            Some(st) => self
                .ctx
                .unexpected_token(expected, st.token.describe(), st.span.clone()),
            None => self.ctx.unexpected_eof(expected),
        }
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.current_token() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn eat_word(&mut self, word: &str) -> bool {
        if self.current_token().is_some_and(|t| t.is_word(word)) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: Token) -> Result<Span> {
        match self.current() {
            Some(st) if st.token == expected => {
                let span = st.span.clone();
                self.advance();
                Ok(span)
            }
            _ => Err(self.error_here(&expected.describe())),
        }
    }

    fn expect_ident(&mut self) -> Result<(String, Span)> {
        match self.current() {
            Some(SpannedToken {
                token: Token::Ident(name),
                span,
            }) => {
                let result = (name.clone(), span.clone());
                self.advance();
                Ok(result)
            }
            _ => Err(self.error_here("identifier")),
        }
    }

    fn parse(mut self) -> Result<Module> {
        let mut module = Module::default();

        while !self.at_end() {
            if self.eat(&Token::Semi) {
                continue;
            }
            if self.eat_word("import") {
                self.skip_import()?;
                continue;
            }

            // Modifiers in front of a declaration
            while self.eat_word("export") || self.eat_word("declare") || self.eat_word("default")
            {
            }

            let declaration = match self.current_token() {
                Some(t) if t.is_word("interface") => self.parse_interface()?,
                Some(t) if t.is_word("type") => self.parse_alias()?,
                Some(t) if t.is_word("enum") => self.parse_enum()?,
                Some(t) if t.is_word("const") && self.peek_is_word(1, "enum") => {
                    self.advance();
                    self.parse_enum()?
                }
                _ => return Err(self.error_here("`interface`, `type` or `enum` declaration")),
            };
            module.declarations.push(declaration);
        }

        Ok(module)
    }

    fn peek_is_word(&self, offset: usize, word: &str) -> bool {
        self.peek_token(offset).is_some_and(|t| t.is_word(word))
    }

    /// Skip an import statement up to and including its module specifier.
    fn skip_import(&mut self) -> Result<()> {
        loop {
            match self.current_token() {
                Some(Token::StringLiteral(_)) => {
                    self.advance();
                    self.eat(&Token::Semi);
                    return Ok(());
                }
                Some(_) => self.advance(),
                None => return Err(self.ctx.unexpected_eof("module specifier")),
            }
        }
    }

    fn parse_interface(&mut self) -> Result<Declaration> {
        self.advance(); // interface
        let (name, span) = self.expect_ident()?;
        self.skip_type_params()?;

        let mut extends = Vec::new();
        if self.eat_word("extends") {
            loop {
                extends.push(self.parse_postfix()?);
                if !self.eat(&Token::Comma) {
                    break;
                }
            }
        }

        self.expect(Token::LBrace)?;
        let members = self.parse_members()?;
        self.expect(Token::RBrace)?;

        Ok(Declaration {
            name,
            span,
            kind: DeclarationKind::Interface { extends, members },
        })
    }

    fn parse_alias(&mut self) -> Result<Declaration> {
        self.advance(); // type
        let (name, span) = self.expect_ident()?;
        self.skip_type_params()?;
        self.expect(Token::Eq)?;
        let ty = self.parse_type()?;
        self.eat(&Token::Semi);

        Ok(Declaration {
            name,
            span,
            kind: DeclarationKind::Alias(ty),
        })
    }

    fn parse_enum(&mut self) -> Result<Declaration> {
        self.advance(); // enum
        let (name, span) = self.expect_ident()?;
        self.expect(Token::LBrace)?;
        loop {
            match self.current_token() {
                Some(Token::RBrace) => {
                    self.advance();
                    break;
                }
                Some(_) => self.advance(),
                None => return Err(self.ctx.unexpected_eof("`}`")),
            }
        }

        Ok(Declaration {
            name,
            span,
            kind: DeclarationKind::Enum,
        })
    }

    /// Skip `<T, U extends X>` after a declaration name.
    fn skip_type_params(&mut self) -> Result<()> {
        if !self.eat(&Token::LAngle) {
            return Ok(());
        }
        let mut depth = 1usize;
        while depth > 0 {
            match self.current_token() {
                Some(Token::LAngle) => depth += 1,
                Some(Token::RAngle) => depth -= 1,
                Some(_) => {}
                None => return Err(self.ctx.unexpected_eof("`>`")),
            }
            self.advance();
        }
        Ok(())
    }

    /// Parse property signatures until a closing brace (not consumed).
    fn parse_members(&mut self) -> Result<Vec<Property>> {
        let mut members = Vec::new();

        loop {
            while self.eat(&Token::Semi) || self.eat(&Token::Comma) {}
            match self.current_token() {
                Some(Token::RBrace) | None => break,
                _ => members.push(self.parse_property()?),
            }
        }

        Ok(members)
    }

    fn parse_property(&mut self) -> Result<Property> {
        // `readonly` is a modifier only when another name follows it
        if self.current_token().is_some_and(|t| t.is_word("readonly"))
            && matches!(
                self.peek_token(1),
                Some(Token::Ident(_) | Token::StringLiteral(_))
            )
        {
            self.advance();
        }

        let (name, span) = match self.current() {
            Some(SpannedToken {
                token: Token::Ident(name) | Token::StringLiteral(name),
                span,
            }) => (name.clone(), span.clone()),
            _ => return Err(self.error_here("property name")),
        };
        self.advance();

        let optional = self.eat(&Token::Question);
        self.expect(Token::Colon)?;
        let ty = self.parse_type()?;

        Ok(Property {
            name,
            optional,
            ty,
            span,
        })
    }

    fn parse_type(&mut self) -> Result<TypeExpr> {
        let start = self.current().map(|st| st.span.start).unwrap_or(0);
        // Leading `|` is allowed in multi-line unions
        self.eat(&Token::Pipe);

        let first = self.parse_intersection()?;
        if self.current_token() != Some(&Token::Pipe) {
            return Ok(first);
        }

        let mut variants = vec![first];
        while self.eat(&Token::Pipe) {
            variants.push(self.parse_intersection()?);
        }
        Ok(TypeExpr::Union {
            variants,
            span: start..self.last_end(),
        })
    }

    fn parse_intersection(&mut self) -> Result<TypeExpr> {
        let start = self.current().map(|st| st.span.start).unwrap_or(0);
        let first = self.parse_postfix()?;
        if self.current_token() != Some(&Token::Amp) {
            return Ok(first);
        }

        let mut parts = vec![first];
        while self.eat(&Token::Amp) {
            parts.push(self.parse_postfix()?);
        }
        Ok(TypeExpr::Intersection {
            parts,
            span: start..self.last_end(),
        })
    }

    fn parse_postfix(&mut self) -> Result<TypeExpr> {
        let start = self.current().map(|st| st.span.start).unwrap_or(0);
        let mut ty = self.parse_primary()?;

        while self.current_token() == Some(&Token::LBracket)
            && self.peek_token(1) == Some(&Token::RBracket)
        {
            self.advance();
            self.advance();
            ty = TypeExpr::Array {
                element: Box::new(ty),
                span: start..self.last_end(),
            };
        }

        Ok(ty)
    }

    fn parse_primary(&mut self) -> Result<TypeExpr> {
        let Some(current) = self.current().cloned() else {
            return Err(self.ctx.unexpected_eof("type"));
        };

        match current.token {
            Token::Ident(first) => {
                self.advance();
                let mut name = first;
                while self.eat(&Token::Dot) {
                    let (part, _) = self.expect_ident()?;
                    name.push('.');
                    name.push_str(&part);
                }

                let mut args = Vec::new();
                if self.eat(&Token::LAngle) {
                    loop {
                        args.push(self.parse_type()?);
                        if !self.eat(&Token::Comma) {
                            break;
                        }
                    }
                    self.expect(Token::RAngle)?;
                }

                Ok(TypeExpr::Named {
                    name,
                    args,
                    span: current.span.start..self.last_end(),
                })
            }
            Token::LBrace => {
                self.advance();
                let members = self.parse_members()?;
                self.expect(Token::RBrace)?;
                Ok(TypeExpr::Object {
                    members,
                    span: current.span.start..self.last_end(),
                })
            }
            Token::LParen => {
                self.advance();
                let inner = self.parse_type()?;
                self.expect(Token::RParen)?;
                Ok(inner)
            }
            Token::StringLiteral(text) | Token::NumberLiteral(text) => {
                self.advance();
                Ok(TypeExpr::Literal {
                    text,
                    span: current.span,
                })
            }
            _ => Err(self.error_here("type")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Module {
        parse_module(&SourceContext::new(src, "test.model.ts")).expect("parse failed")
    }

    fn members(decl: &Declaration) -> &[Property] {
        match &decl.kind {
            DeclarationKind::Interface { members, .. } => members,
            _ => panic!("Expected interface"),
        }
    }

    #[test]
    fn test_parse_interface() {
        let module = parse(
            r#"
            export interface ProductItem {
              id: number;
              name: string;
              price?: number;
              createdAt: Date;
            }
            "#,
        );

        assert_eq!(module.declarations.len(), 1);
        let decl = &module.declarations[0];
        assert_eq!(decl.name, "ProductItem");

        let names: Vec<_> = members(decl).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["id", "name", "price", "createdAt"]);
        assert!(members(decl)[2].optional);
        assert!(!members(decl)[1].optional);
    }

    #[test]
    fn test_members_without_semicolons() {
        let module = parse("interface A {\n  a: string\n  b: number,\n  c: Date\n}");
        assert_eq!(members(&module.declarations[0]).len(), 3);
    }

    #[test]
    fn test_keywords_as_property_names() {
        let module = parse("interface A { type: string; readonly readonly: string; from?: Date }");
        let names: Vec<_> = members(&module.declarations[0])
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["type", "readonly", "from"]);
    }

    #[test]
    fn test_inline_object_type() {
        let module = parse("interface Customer { address: { street: string; city: string } }");
        let address = &members(&module.declarations[0])[0];
        match &address.ty {
            TypeExpr::Object { members, .. } => assert_eq!(members.len(), 2),
            other => panic!("Expected object type, got {other:?}"),
        }
    }

    #[test]
    fn test_imports_and_aliases() {
        let module = parse(
            r#"
            import { Address } from './address.model';
            import * as shared from "../shared";
            export type Tag = { label: string };
            export enum Status { Active = 'active', Archived = 'archived' }
            export interface Post extends Base<string> { tag: Tag }
            "#,
        );

        let names: Vec<_> = module
            .declarations
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, ["Tag", "Status", "Post"]);
        assert!(matches!(module.declarations[1].kind, DeclarationKind::Enum));
        match &module.declarations[2].kind {
            DeclarationKind::Interface { extends, .. } => {
                assert!(matches!(&extends[0], TypeExpr::Named { name, args, .. }
                    if name == "Base" && args.len() == 1));
            }
            _ => panic!("Expected interface"),
        }
    }

    #[test]
    fn test_complex_type_forms() {
        let module = parse(
            "interface A { tags: string[]; state: 'a' | 'b'; both: B & C; list: Array<Item>; q: ns.Type }",
        );
        let forms: Vec<_> = members(&module.declarations[0])
            .iter()
            .map(|p| p.ty.form())
            .collect();
        assert_eq!(
            forms,
            [
                "array type",
                "union type",
                "intersection type",
                "generic type",
                "named type"
            ]
        );
    }

    #[test]
    fn test_type_spans_cover_source_text() {
        let src = "interface A { tags: string[]; }";
        let module = parse(src);
        let span = members(&module.declarations[0])[0].ty.span();
        assert_eq!(&src[span], "string[]");
    }

    #[test]
    fn test_missing_colon_is_an_error() {
        let ctx = SourceContext::new("interface A { name string }", "a.ts");
        let err = parse_module(&ctx).unwrap_err();
        assert!(err.to_string().contains("expected `:`"));
    }

    #[test]
    fn test_unterminated_interface_is_an_error() {
        let ctx = SourceContext::new("interface A { name: string;", "a.ts");
        let err = parse_module(&ctx).unwrap_err();
        assert!(matches!(*err, crate::Error::UnexpectedEof { .. }));
    }

    #[test]
    fn test_unknown_statement_is_an_error() {
        let ctx = SourceContext::new("export class Foo {}", "a.ts");
        let err = parse_module(&ctx).unwrap_err();
        assert!(err.to_string().contains("found `class`"));
    }
}
