use std::{collections::VecDeque, io};

use lined_buffer::{
    model::{viewport::ViewPort, LineBuffer},
    view::Screen,
};
use lined_frontend::{
    editor::{Editor, EditorState},
    error::AppError,
    terminal::TerminalIo,
};
use lined_keymap::{conversion, key::Key, KeyMap};

#[derive(Debug, Default, PartialEq)]
struct Frame {
    cursor: Option<(u16, u16)>,
    lines: Vec<String>,
}

struct ScriptedTerminal {
    frames: Vec<Frame>,
    keys: VecDeque<Key>,
    staged: Frame,
    viewport: ViewPort,
}

impl ScriptedTerminal {
    fn new(keycodes: &str, height: u16, width: u16) -> Self {
        Self {
            frames: Vec::new(),
            keys: conversion::from_keycode_string(keycodes),
            staged: Frame::default(),
            viewport: ViewPort::new(height, width),
        }
    }
}

impl Screen for ScriptedTerminal {
    fn clear(&mut self) -> io::Result<()> {
        self.staged = Frame::default();
        Ok(())
    }

    fn move_cursor(&mut self, row: u16, column: u16) -> io::Result<()> {
        self.staged.cursor = Some((row, column));
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.staged.lines.push(line.to_string());
        Ok(())
    }
}

impl TerminalIo for ScriptedTerminal {
    fn size(&self) -> Result<ViewPort, AppError> {
        Ok(self.viewport)
    }

    fn read_key(&mut self) -> Result<Option<Key>, AppError> {
        match self.keys.pop_front() {
            Some(key) => Ok(Some(key)),
            None => Err(AppError::TerminalOperationFailed(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no keys left",
            ))),
        }
    }

    fn present(&mut self) -> Result<(), AppError> {
        self.frames.push(std::mem::take(&mut self.staged));
        Ok(())
    }
}

fn run(text: &str, keycodes: &str, height: u16, width: u16) -> (Editor, ScriptedTerminal) {
    let mut editor = Editor::new(LineBuffer::from_text(text));
    let mut terminal = ScriptedTerminal::new(keycodes, height, width);

    editor
        .run(&mut terminal, &KeyMap::default())
        .expect("editor run failed");

    (editor, terminal)
}

fn contents(editor: &Editor) -> Vec<&str> {
    editor.buffer().lines().iter().map(|l| l.content()).collect()
}

#[test]
fn scenario_scrolls_and_inserts_on_third_line() {
    let (editor, terminal) = run("abc\nde\nfghij", "<down><down>X<C-q>", 2, 3);

    assert_eq!(vec!["abc", "de", "Xfghij"], contents(&editor));
    assert_eq!(1, editor.buffer().pointer_row());
    assert_eq!(1, editor.cursor().row());
    assert_eq!(1, editor.cursor().column());
    assert_eq!(EditorState::Terminated, editor.state());

    assert_eq!(
        Frame {
            cursor: Some((0, 0)),
            lines: vec!["ab".to_string()],
        },
        terminal.frames[0]
    );
    assert_eq!(
        Frame {
            cursor: Some((1, 0)),
            lines: vec!["de".to_string()],
        },
        terminal.frames[2]
    );
}

#[test]
fn quit_clears_screen() {
    let (_, terminal) = run("abc", "<C-q>", 5, 10);

    assert_eq!(Some(&Frame::default()), terminal.frames.last());
    assert_eq!(2, terminal.frames.len());
}

#[test]
fn backspace_deletes_before_cursor() {
    let (editor, _) = run("abc", "<right><right><bs><C-q>", 5, 10);

    assert_eq!(vec!["ac"], contents(&editor));
    assert_eq!(1, editor.cursor().column());
}

#[test]
fn backspace_at_document_start_is_noop() {
    let (editor, _) = run("abc", "<bs><C-q>", 5, 10);

    assert_eq!(vec!["abc"], contents(&editor));
    assert_eq!(0, editor.cursor().column());
}

#[test]
fn delete_removes_char_on_cursor() {
    let (editor, _) = run("abc", "<right><del><C-q>", 5, 10);

    assert_eq!(vec!["ac"], contents(&editor));
    assert_eq!(1, editor.cursor().column());
}

#[test]
fn home_and_end_jump_within_line() {
    let (editor, _) = run("abcdef", "<end>!<home>?<C-q>", 5, 20);

    assert_eq!(vec!["?abcdef!"], contents(&editor));
    assert_eq!(1, editor.cursor().column());
}

#[test]
fn typing_past_viewport_width_scrolls_right() {
    let (editor, terminal) = run("", "hello<C-q>", 5, 4);

    assert_eq!(vec!["hello"], contents(&editor));
    assert_eq!(2, editor.buffer().pointer_column());
    assert_eq!(3, editor.cursor().column());

    let last_rendered = &terminal.frames[terminal.frames.len() - 2];
    assert_eq!(vec!["llo".to_string()], last_rendered.lines);
}

#[test]
fn unbound_keys_are_ignored() {
    let (editor, _) = run("abc", "<tab><cr><esc><C-a><C-q>", 5, 10);

    assert_eq!(vec!["abc"], contents(&editor));
    assert_eq!(0, editor.cursor().column());
}

#[test]
fn read_failure_terminates_with_error() {
    let mut editor = Editor::new(LineBuffer::from_text("abc"));
    let mut terminal = ScriptedTerminal::new("x", 5, 10);

    let result = editor.run(&mut terminal, &KeyMap::default());

    assert!(matches!(result, Err(AppError::TerminalOperationFailed(_))));
    assert_eq!(EditorState::Terminated, editor.state());
    assert_eq!(vec!["xabc"], contents(&editor));
}
