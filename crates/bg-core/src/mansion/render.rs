//! ASCII rendering of the mansion grid

use super::Mansion;
use crate::{GRID_COLS, GRID_ROWS};

const CELL_WIDTH: usize = 17;

impl Mansion {
    /// One line per grid row, one bracketed cell per column
    pub fn render_ascii(&self) -> String {
        let mut out = String::new();
        out.push_str("------------------------ ASCII MAP ------------------------\n");
        for x in 0..GRID_ROWS {
            let cells: Vec<String> = (0..GRID_COLS)
                .map(|y| {
                    let name = self.at(x, y).map_or("", |id| self.room(id).name.as_str());
                    format!("[{name:<CELL_WIDTH$}]")
                })
                .collect();
            out.push_str(&cells.join(" "));
            out.push('\n');
        }
        out.push_str("------------------------- END MAP -------------------------\n");
        out
    }
}
