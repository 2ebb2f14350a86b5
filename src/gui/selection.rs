// src/gui/selection.rs
//
// Multi-row selection over the displayed table. Indices refer to rows of the
// cached table; the loader drops the selection whenever that table goes away.

use std::collections::BTreeSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowSelection {
    rows: BTreeSet<usize>,
    anchor: Option<usize>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickMods {
    /// Extend from the last clicked row
    pub shift: bool,
    /// Toggle one row, keep the rest
    pub ctrl: bool,
}

impl RowSelection {
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn contains(&self, ix: usize) -> bool { self.rows.contains(&ix) }

    /// Selected indices, ascending.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied()
    }

    /// Plain click selects only `ix` (or clears it if it was the only one),
    /// ctrl toggles `ix`, shift selects the range from the last click.
    pub fn click(&mut self, ix: usize, mods: ClickMods) {
        match (mods.shift, self.anchor) {
            (true, Some(a)) => {
                let (lo, hi) = if a <= ix { (a, ix) } else { (ix, a) };
                if !mods.ctrl {
                    self.rows.clear();
                }
                self.rows.extend(lo..=hi);
                return; // anchor stays put for further shift-clicks
            }
            _ if mods.ctrl => {
                if !self.rows.remove(&ix) {
                    self.rows.insert(ix);
                }
            }
            _ => {
                let only_this = self.rows.len() == 1 && self.rows.contains(&ix);
                self.rows.clear();
                if !only_this {
                    self.rows.insert(ix);
                }
            }
        }
        self.anchor = Some(ix);
    }
}
