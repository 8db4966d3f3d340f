pub mod python;

use crate::lexer::Instruction;

/// Everything that ties the translator to a host language.
///
/// Statements are indexed by [`Instruction::index`]; each symbol maps to zero
/// or more statements, emitted one per line at the current loop depth.
#[derive(Debug)]
pub struct TemplateTable {
    /// Human readable name of the host language
    pub name: &'static str,
    /// File extension (without the dot) for generated files
    pub extension: &'static str,

    /// Lines emitted before any instruction: header, tape and cursor declarations
    pub prologue: &'static [&'static str],

    /// Prefix repeated once per open loop
    pub indent_unit: &'static str,
    /// Statement placed inside a loop whose body emitted nothing
    pub empty_block: &'static str,

    pub statements: [&'static [&'static str]; 8],
}

impl TemplateTable {
    pub fn statements(&self, instruction: Instruction) -> &'static [&'static str] {
        self.statements[instruction.index()]
    }

    pub fn indent(&self, level: usize) -> String {
        self.indent_unit.repeat(level)
    }
}
