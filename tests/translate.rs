use bf2py::{translate, SyntaxError, Translator, PYTHON};

const HELLO_WORLD: &str = "\
[ Prints \"Hello World!\" followed by a newline.
  Everything inside this first loop is a comment, even the . and , ]
++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.
";

fn emitted(code: &str) -> Vec<&str> {
    let lines: Vec<&str> = code.split('\n').collect();
    lines[PYTHON.prologue.len()..lines.len() - 2].to_vec()
}

#[test]
fn hello_world_translates() {
    let code = translate(HELLO_WORLD).unwrap();
    let body = emitted(&code);

    assert!(code.starts_with(PYTHON.prologue[0]));
    assert!(code.ends_with("\n\n"));
    assert_eq!(body[0], "_memory[_pointer] += 1");
    assert!(body.contains(&"        _memory[_pointer] += 1"));
    assert_eq!(
        body.iter().filter(|l| l.trim_start().starts_with("print(")).count(),
        13
    );
    // nothing from the leading comment loop leaks through
    assert_eq!(
        body.iter().filter(|l| l.trim_start().starts_with("while _memory")).count(),
        3
    );
}

#[test]
fn loop_depth_returns_to_zero() {
    let code = translate("+[>+[-]<-]+").unwrap();
    let body = emitted(&code);
    assert_eq!(*body.last().unwrap(), "_memory[_pointer] += 1");
    assert!(body.iter().any(|l| l.starts_with("        ")));
}

#[test]
fn windows_line_endings_count_lines() {
    assert_eq!(
        translate("+\r\n+\r\n]").unwrap_err(),
        SyntaxError::UnmatchedLoopClose { line: 3, column: 1 }
    );
}

#[test]
fn translator_reports_counts() {
    let translation = Translator::new(&PYTHON).translate(HELLO_WORLD).unwrap();
    assert_eq!(translation.code, translate(HELLO_WORLD).unwrap());
    assert_eq!(translation.lines, 4);
    assert_eq!(
        translation.instructions,
        HELLO_WORLD.lines().nth(2).unwrap().chars().count()
    );
}
