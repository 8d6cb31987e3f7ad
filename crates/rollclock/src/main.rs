use anyhow::Result;

use rollclock_engine::logging::{init_logging, LoggingConfig};
use rollclock_ui::Application;

const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut app = Application::new().title("Rolling Clock").size(400.0, 800.0);
    match load_font() {
        Some(bytes) => app = app.font(bytes),
        None => log::warn!("no system font found; digits will not be drawn"),
    }
    app.run()
}

fn load_font() -> Option<Vec<u8>> {
    FONT_PATHS.iter().find_map(|p| {
        let bytes = std::fs::read(p).ok()?;
        log::debug!("using font {p}");
        Some(bytes)
    })
}
