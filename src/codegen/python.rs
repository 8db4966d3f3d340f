//! Python 3 templates.
//!
//! The tape is a plain `list[int]`, so cells never wrap. Loops close by
//! dedentation, which is why `]` has no statements.

use super::TemplateTable;

pub static PYTHON: TemplateTable = TemplateTable {
    name: "Python",
    extension: "py",

    prologue: &[
        "\"\"\" This Python code was generated from Brainfuck using bf2py.",
        "",
        "For more details, visit https://github.com/char-lock/bf2x",
        "",
        "\"\"\"",
        "",
        "_memory: list[int] = [0]",
        "_pointer: int = 0",
        "",
    ],

    indent_unit: "    ",
    empty_block: "pass",

    // Same order as `Instruction::ALL`
    statements: [
        // >
        &[
            "_pointer += 1",
            "while _pointer >= len(_memory): _memory.append(0)",
        ],
        // <
        &["_pointer -= 1"],
        // +
        &["_memory[_pointer] += 1"],
        // -
        &["_memory[_pointer] -= 1"],
        // .
        &["print(chr(_memory[_pointer]), end='')"],
        // ,
        &["_memory[_pointer] = int(input())"],
        // [
        &["while _memory[_pointer] > 0:"],
        // ]
        &[],
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Instruction;

    #[test]
    fn shift_right_grows_the_tape() {
        let statements = PYTHON.statements(Instruction::ShiftRight);
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0], "_pointer += 1");
        assert!(statements[1].contains("_memory.append(0)"));
    }

    #[test]
    fn loop_end_closes_by_dedent() {
        assert!(PYTHON.statements(Instruction::LoopEnd).is_empty());
    }

    #[test]
    fn every_other_instruction_has_one_statement() {
        for instruction in Instruction::ALL {
            if matches!(instruction, Instruction::ShiftRight | Instruction::LoopEnd) {
                continue;
            }
            assert_eq!(PYTHON.statements(instruction).len(), 1, "{:?}", instruction);
        }
    }

    #[test]
    fn prologue_matches_bf2py_header() {
        assert_eq!(
            PYTHON.prologue.join("\n"),
            "\"\"\" This Python code was generated from Brainfuck using bf2py.\n\
             \n\
             For more details, visit https://github.com/char-lock/bf2x\n\
             \n\
             \"\"\"\n\
             \n\
             _memory: list[int] = [0]\n\
             _pointer: int = 0\n"
        );
    }

    #[test]
    fn prologue_declares_tape_and_cursor() {
        assert!(PYTHON.prologue.contains(&"_memory: list[int] = [0]"));
        assert!(PYTHON.prologue.contains(&"_pointer: int = 0"));
        assert_eq!(PYTHON.indent(2), "        ");
    }
}
