// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pretty printers for reporting information. Lines are grouped into blocks
//! and drawn as a tree underneath a bold title.

use std::{borrow::Cow, cell::RefCell};

use log::Level;

const VERTICAL: char = '│';
const UP_AND_RIGHT: char = '└';
const VERTICAL_AND_RIGHT: char = '├';

type Block = Vec<Cow<'static, str>>;

thread_local! {
    /// Warnings are collected per thread.
    static WARNINGS: RefCell<Vec<Block>> = RefCell::new(vec![]);
}

/// Prefix every line of every block with a tree symbol. The first line of a
/// block branches off the tree, unless it's the only line of the last block,
/// which closes the tree.
pub(super) fn tree_lines(blocks: &[Block]) -> Vec<String> {
    let num_blocks = blocks.len();
    let mut lines = vec![];
    for (i_block, block) in blocks.iter().enumerate() {
        let last_block = i_block + 1 == num_blocks;
        for (i_line, line) in block.iter().enumerate() {
            let symbol = match (i_line, block.len() == 1, last_block) {
                (0, true, true) => UP_AND_RIGHT,
                (0, _, _) => VERTICAL_AND_RIGHT,
                _ => VERTICAL,
            };
            lines.push(format!("{symbol} {line}"));
        }
    }
    lines
}

fn log_tree(level: Level, title: &str, blocks: &[Block]) {
    log::log!(level, "{}", console::style(title).bold());
    for line in tree_lines(blocks) {
        log::log!(level, "{line}");
    }
    log::log!(level, "");
}

/// High-level information, printed at info level.
pub(crate) struct InfoPrinter {
    title: Cow<'static, str>,
    blocks: Vec<Block>,
}

impl InfoPrinter {
    pub(crate) fn new(title: Cow<'static, str>) -> Self {
        Self {
            title,
            blocks: vec![],
        }
    }

    pub(crate) fn push_line(&mut self, line: Cow<'static, str>) {
        self.blocks.push(vec![line]);
    }

    pub(crate) fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub(crate) fn display(self) {
        log_tree(Level::Info, &self.title, &self.blocks);
    }
}

/// Things that can be collected as warnings, to be displayed all at once by
/// [display_warnings].
pub(crate) trait Warn {
    fn warn(self);
}

fn push_warning(block: Block) {
    WARNINGS.with(|w| w.borrow_mut().push(block));
}

impl Warn for &'static str {
    fn warn(self) {
        push_warning(vec![self.into()]);
    }
}

impl Warn for String {
    fn warn(self) {
        push_warning(vec![self.into()]);
    }
}

impl Warn for Block {
    fn warn(self) {
        push_warning(self);
    }
}

/// Empty the collection of warnings, returning what was in it.
pub(super) fn take_warnings() -> Vec<Block> {
    WARNINGS.with(|w| w.take())
}

/// Print out any warnings that have been collected since the last call. The
/// collection is emptied.
pub(crate) fn display_warnings() {
    let blocks = take_warnings();
    log::debug!("Displaying {} warnings", blocks.len());
    if !blocks.is_empty() {
        log_tree(Level::Warn, "Warnings", &blocks);
    }
}
