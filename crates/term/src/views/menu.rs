//! Launcher view: title, entry list, and selection cursor.

use tui_arcade_core::menu::{Menu, MenuEntry};

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::views::{hint_style, label_style, value_style};

/// Renders the launcher menu into a framebuffer.
#[derive(Default)]
pub struct MenuView;

impl MenuView {
    pub fn render(&self, menu: &Menu, fb: &mut FrameBuffer) {
        fb.clear(' ', CellStyle::default());

        let w = fb.width();
        let top = fb.height().saturating_sub(12) / 2;

        fb.put_str_centered(0, top, w, "T E R M I N A L   A R C A D E", label_style());

        let selected_style = CellStyle::fg(Rgb::new(120, 180, 255)).bold();
        for (i, entry) in MenuEntry::ALL.iter().enumerate() {
            let y = top + 3 + (i as u16) * 2;
            if i == menu.selected_index() {
                let line = format!("> {} <", entry.label());
                fb.put_str_centered(0, y, w, &line, selected_style);
            } else {
                fb.put_str_centered(0, y, w, entry.label(), value_style());
            }
        }

        fb.put_str_centered(
            0,
            top + 3 + (MenuEntry::ALL.len() as u16) * 2 + 1,
            w,
            "↑/↓ select - ENTER launch - ESC quit",
            hint_style(),
        );
    }
}
