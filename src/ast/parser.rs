use crate::ast::{AstNode, Operator};
use crate::error::CalcError;
use log::debug;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "./expression.pest"] // Link to the grammar file
pub struct ExpressionParser;

impl ExpressionParser {
    /// Parses an infix arithmetic expression into an AST.
    ///
    /// The grammar accepts decimals, the four binary operators, parentheses
    /// and a leading unary minus on any factor. Anything else is a
    /// `CalcError::Syntax`.
    pub fn parse_expression(input: &str) -> Result<AstNode, CalcError> {
        debug!("parsing expression: {}", input);
        let parsed = ExpressionParser::parse(Rule::expression, input)
            .map_err(|e| CalcError::Syntax(e.to_string()))?
            .next()
            .ok_or_else(|| CalcError::Syntax("empty parse result".to_string()))?;

        let arithmetic = parsed
            .into_inner()
            .next()
            .ok_or_else(|| CalcError::Syntax("missing expression body".to_string()))?;
        Self::build_arithmetic(arithmetic)
    }

    fn build_arithmetic(pair: Pair<Rule>) -> Result<AstNode, CalcError> {
        debug!("building arithmetic expression: {:?}", pair);
        let mut pairs = pair.into_inner();
        let mut node = Self::build_term(Self::next_pair(&mut pairs)?)?;

        while let Some(operator_pair) = pairs.next() {
            let operator: Operator = operator_pair.as_str().try_into()?;
            let right = Self::build_term(Self::next_pair(&mut pairs)?)?;
            node = AstNode::BinaryOperation {
                left: Box::new(node),
                operator,
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    fn build_term(pair: Pair<Rule>) -> Result<AstNode, CalcError> {
        debug!("building term: {:?}", pair);
        let mut pairs = pair.into_inner();
        let mut node = Self::build_factor(Self::next_pair(&mut pairs)?)?;

        while let Some(operator_pair) = pairs.next() {
            let operator: Operator = operator_pair.as_str().try_into()?;
            let right = Self::build_factor(Self::next_pair(&mut pairs)?)?;
            node = AstNode::BinaryOperation {
                left: Box::new(node),
                operator,
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    fn build_factor(pair: Pair<Rule>) -> Result<AstNode, CalcError> {
        let mut pairs = pair.into_inner();
        debug!("building factor: {:?}", pairs);

        let first = Self::next_pair(&mut pairs)?;
        if first.as_rule() == Rule::MINUS {
            let inner = Self::build_primary(Self::next_pair(&mut pairs)?)?;
            return Ok(AstNode::Negate(Box::new(inner)));
        }

        Self::build_primary(first)
    }

    fn build_primary(pair: Pair<Rule>) -> Result<AstNode, CalcError> {
        debug!("building primary expression: {:?}", pair);
        match pair.as_rule() {
            Rule::number => {
                let value = pair
                    .as_str()
                    .parse::<f64>()
                    .map_err(|e| CalcError::Syntax(format!("malformed number: {}", e)))?;
                Ok(AstNode::Number(value))
            }
            Rule::group => {
                let mut pairs = pair.into_inner();
                let inner = Self::build_arithmetic(Self::next_pair(&mut pairs)?)?;
                Ok(AstNode::Group(Box::new(inner)))
            }
            _ => Err(CalcError::Syntax(format!(
                "unexpected rule in primary expression: {:?}",
                pair.as_rule()
            ))),
        }
    }

    // The grammar guarantees these pairs exist; surfacing a syntax error keeps
    // the parser panic-free anyway.
    fn next_pair<'a>(
        pairs: &mut pest::iterators::Pairs<'a, Rule>,
    ) -> Result<Pair<'a, Rule>, CalcError> {
        pairs
            .next()
            .ok_or_else(|| CalcError::Syntax("unexpected end of expression".to_string()))
    }
}
