use crate::codegen::{python::PYTHON, TemplateTable};
use crate::lexer::{Instruction, Lexer, TokenKind};

use super::SyntaxError;

/// Generated code plus a few numbers worth reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub code: String,
    /// Instruction symbols that were translated (leading comment loops excluded)
    pub instructions: usize,
    /// Lines in the source
    pub lines: usize,
}

pub struct Translator<'t> {
    table: &'t TemplateTable,
}

/// Scan state for a single translation
struct State {
    indent_level: usize,
    open_brackets: usize,
    processed_count: usize,

    // output length right after each open loop's header, to spot empty bodies
    loop_bodies: Vec<usize>,
    output: Vec<String>,
}

impl<'t> Translator<'t> {
    pub fn new(table: &'t TemplateTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t TemplateTable {
        self.table
    }

    pub fn translate(&self, source: &str) -> Result<Translation, SyntaxError> {
        let mut state = State {
            indent_level: 0,
            open_brackets: 0,
            processed_count: 0,
            loop_bodies: vec![],
            output: self.table.prologue.iter().map(|l| l.to_string()).collect(),
        };

        // the lexer owns line counting, newlines only need skipping here
        let mut lexer = Lexer::new(source);
        while let Some(token) = lexer.next_token() {
            let instruction = match token.kind {
                TokenKind::Newline => continue,
                // comments are inert everywhere, even inside a leading comment loop
                TokenKind::Comment(_) => continue,
                TokenKind::Instruction(instruction) => instruction,
            };

            // Nothing has been emitted yet so the first cell is still zero:
            // a loop here can never run and is treated as a comment.
            if state.processed_count == 0 && (state.open_brackets > 0 || instruction.is_bracket()) {
                match instruction {
                    Instruction::LoopStart => state.open_brackets += 1,
                    Instruction::LoopEnd if state.open_brackets == 0 => {
                        return Err(SyntaxError::UnmatchedLoopClose {
                            line: token.line,
                            column: token.col,
                        })
                    }
                    Instruction::LoopEnd => state.open_brackets -= 1,
                    _ => {}
                }
                continue;
            }

            if instruction == Instruction::LoopEnd && state.open_brackets == 0 {
                return Err(SyntaxError::UnmatchedLoopClose {
                    line: token.line,
                    column: token.col,
                });
            }

            state.processed_count += 1;
            self.emit(&mut state, instruction);
        }

        if state.open_brackets > 0 {
            return Err(SyntaxError::UnmatchedLoopOpen);
        }

        let instructions = state.processed_count;
        let lines = lexer.cur_line;
        let mut output = state.output;
        output.push("\n".to_string());

        Ok(Translation {
            code: output.join("\n"),
            instructions,
            lines,
        })
    }

    fn emit(&self, state: &mut State, instruction: Instruction) {
        if instruction == Instruction::LoopEnd {
            // the body sits one level deeper than the loop header
            if state.loop_bodies.pop() == Some(state.output.len()) {
                let line = format!("{}{}", self.table.indent(state.indent_level), self.table.empty_block);
                state.output.push(line);
            }
            state.indent_level -= 1;
            state.open_brackets -= 1;
        }

        let indent = self.table.indent(state.indent_level);
        for statement in self.table.statements(instruction) {
            state.output.push(format!("{}{}", indent, statement));
        }

        if instruction == Instruction::LoopStart {
            state.open_brackets += 1;
            state.indent_level += 1;
            state.loop_bodies.push(state.output.len());
        }
    }
}

/// Translate `source` to Python
pub fn translate(source: &str) -> Result<String, SyntaxError> {
    Translator::new(&PYTHON).translate(source).map(|t| t.code)
}
