mod ctx;
mod error;
mod modifier;
mod num;
mod roller;
mod stringify;
mod tree;

pub use ctx::{RollContext, RollLimits};
pub use error::{ArithmeticError, RangeError};
pub use num::Number;
pub use roller::Roller;
pub use stringify::{MarkdownStringifier, SimpleStringifier, Stringify};
pub use tree::{Literal, RolledDice, Total, Value};

#[cfg(test)]
pub(crate) use roller::{ScriptRoller, StepRoller};
