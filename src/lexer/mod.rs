pub mod lexer;

pub use lexer::Lexer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    // `>`: Increment the `data pointer` by one, growing the tape if needed
    ShiftRight,
    // `<`: Decrement the `data pointer` by one
    ShiftLeft,

    // `+`: Increment the cell at the `data pointer` by one
    Increment,
    // `-`: Decrement the cell at the `data pointer` by one
    Decrement,

    // `.`: Write the cell at the `data pointer` to the output as a single character
    Write,
    // `,`: Read the next value from the input into the cell at the `data pointer`
    Read,

    // `[`: Repeat the enclosed instructions while the cell at the `data pointer` is nonzero
    LoopStart,
    // `]`: Close the innermost open loop
    LoopEnd,
}

impl Instruction {
    pub const ALL: [Instruction; 8] = [
        Instruction::ShiftRight,
        Instruction::ShiftLeft,
        Instruction::Increment,
        Instruction::Decrement,
        Instruction::Write,
        Instruction::Read,
        Instruction::LoopStart,
        Instruction::LoopEnd,
    ];

    pub fn from_char(c: char) -> Option<Instruction> {
        match c {
            '>' => Some(Instruction::ShiftRight),
            '<' => Some(Instruction::ShiftLeft),
            '+' => Some(Instruction::Increment),
            '-' => Some(Instruction::Decrement),
            '.' => Some(Instruction::Write),
            ',' => Some(Instruction::Read),
            '[' => Some(Instruction::LoopStart),
            ']' => Some(Instruction::LoopEnd),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Instruction::ShiftRight => '>',
            Instruction::ShiftLeft => '<',
            Instruction::Increment => '+',
            Instruction::Decrement => '-',
            Instruction::Write => '.',
            Instruction::Read => ',',
            Instruction::LoopStart => '[',
            Instruction::LoopEnd => ']',
        }
    }

    /// Position of this instruction in [`Instruction::ALL`], used to index template tables
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_bracket(self) -> bool {
        matches!(self, Instruction::LoopStart | Instruction::LoopEnd)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Instruction(Instruction),

    // Only tracked so that errors can report a line
    Newline,

    // Every other run of characters
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,

    /** Human readable position of the first character of the token */
    pub line: usize,
    pub col: usize,
}
