use std::io::{self, Write};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum OutputBlock {
    Text(String),
    Blank,
}

/// Everything one turn wants printed, in order.
#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn blank(&mut self) {
        self.blocks.push(OutputBlock::Blank);
    }

    /// Join the blocks the way the console prints them, one per line.
    pub fn to_text(&self) -> String {
        let mut s = String::new();
        for block in &self.blocks {
            if let OutputBlock::Text(t) = block {
                s.push_str(t);
            }
            s.push('\n');
        }
        s
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(self.to_text().as_bytes())
    }
}
