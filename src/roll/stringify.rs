use super::tree::{Literal, RolledDice, Value};
use crate::common::{BinaryOperator, UInt};
use crate::eval::{ScalarRoll, Step};

/// Renders a [ScalarRoll] as `<expression> -> [<values>] = <outcome>`.
pub trait Stringify {
    fn stringify(&mut self, roll: &ScalarRoll) -> String {
        let steps = roll
            .steps()
            .iter()
            .map(|step| match step {
                Step::Value(value) => self.str_value(value),
                Step::Op(op) => self.str_op(*op),
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{} -> [{}] = {}",
            roll.expression(),
            steps,
            self.str_outcome(roll)
        )
    }

    fn str_outcome(&mut self, roll: &ScalarRoll) -> String {
        roll.outcome().to_string()
    }

    fn str_value(&mut self, value: &Value) -> String {
        match value {
            Value::Scalar(lit) => self.str_literal(lit),
            Value::Vector(dice) => self.str_dice(dice),
        }
    }

    fn str_literal(&mut self, lit: &Literal) -> String {
        lit.0.to_string()
    }

    fn str_dice(&mut self, dice: &RolledDice) -> String {
        let faces = dice
            .kept
            .iter()
            .map(|&face| self.str_face(face, dice.term.sides.get()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{}]", faces)
    }

    fn str_face(&mut self, face: UInt, _sides: UInt) -> String {
        face.to_string()
    }

    fn str_op(&mut self, op: BinaryOperator) -> String {
        op.to_string()
    }
}

#[derive(Default)]
pub struct SimpleStringifier;

impl SimpleStringifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stringify for SimpleStringifier {}

/// Bolds natural ones and maximums, strikes through dropped faces and
/// wraps the outcome in backticks.
#[derive(Default)]
pub struct MarkdownStringifier;

impl MarkdownStringifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stringify for MarkdownStringifier {
    fn str_outcome(&mut self, roll: &ScalarRoll) -> String {
        format!("`{}`", roll.outcome())
    }

    fn str_dice(&mut self, dice: &RolledDice) -> String {
        let sides = dice.term.sides.get();
        let mut faces: Vec<_> = dice
            .kept
            .iter()
            .map(|&face| self.str_face(face, sides))
            .collect();
        for &face in &dice.dropped {
            let face = self.str_face(face, sides);
            faces.push(format!("~~{}~~", face));
        }
        format!("[{}]", faces.join(", "))
    }

    fn str_face(&mut self, face: UInt, sides: UInt) -> String {
        if face == 1 || face == sides {
            format!("**{}**", face)
        } else {
            face.to_string()
        }
    }
}
