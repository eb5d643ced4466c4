// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Pretty printers for reporting information.
use std::borrow::Cow;

const VERTICAL: char = '│';
const UP_AND_RIGHT: char = '└';
const VERTICAL_AND_RIGHT: char = '├';

pub(crate) struct InfoPrinter {
    title: Cow<'static, str>,
    blocks: Vec<Vec<Cow<'static, str>>>,
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

    pub(crate) fn push_block(&mut self, block: Vec<Cow<'static, str>>) {
        self.blocks.push(block);
    }

    /// The symbol preceding each line, in order.
    pub(super) fn symbols(&self) -> Vec<char> {
        let num_blocks = self.blocks.len();
        let mut symbols = vec![];
        for (i_block, block) in self.blocks.iter().enumerate() {
            let num_lines = block.len();
            for i_line in 0..num_lines {
                symbols.push(
                    match (i_line, i_line + 1 == num_lines, i_block + 1 == num_blocks) {
                        (0, false, _) => VERTICAL_AND_RIGHT,
                        (0, _, false) => VERTICAL_AND_RIGHT,
                        (0, true, true) => UP_AND_RIGHT,
                        _ => VERTICAL,
                    },
                );
            }
        }
        symbols
    }

    pub(crate) fn display(self) {
        log::info!("{}", console::style(&self.title).bold());
        let symbols = self.symbols();
        for (symbol, line) in symbols.into_iter().zip(self.blocks.into_iter().flatten()) {
            log::info!("{symbol} {line}");
        }
        log::info!("");
    }
}
