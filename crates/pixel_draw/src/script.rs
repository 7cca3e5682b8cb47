//! Line based editing scripts.
//!
//! ```text
//! # comments and blank lines are skipped
//! resolution 16
//! color #f50076
//! tool bucket
//! cell 0 0
//! color 3          # palette swatch
//! tool pencil
//! click 100.5 42
//! resize 256
//! clear
//! ```

use anyhow::{Context, Result, anyhow, bail};
use pixel_engine_edit::{CanvasController, Color, ConfirmGate, DEFAULT_PALETTE, GridPosition, MAX_SURFACE_SIZE, RenderSurface, ToolbarAction};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Tool(ToolbarAction),
    Color(Color),
    Click(f32, f32),
    Cell(GridPosition),
    Resolution(usize),
    Clear,
    Resize(u32),
}

fn parse_color(arg: &str) -> Result<Color> {
    // short pure numbers are palette indices, everything else is hex
    if arg.len() <= 2 && arg.chars().all(|c| c.is_ascii_digit()) {
        let index: usize = arg.parse()?;
        return DEFAULT_PALETTE
            .get(index)
            .copied()
            .ok_or_else(|| anyhow!("palette index {index} out of range (0..{})", DEFAULT_PALETTE.len()));
    }
    Ok(Color::from_hex(arg)?)
}

fn parse_number<T: std::str::FromStr>(args: &[&str], index: usize) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let arg = args.get(index).ok_or_else(|| anyhow!("missing argument {}", index + 1))?;
    arg.parse().with_context(|| format!("invalid number '{arg}'"))
}

/// Cuts a comment off `line`. A comment is a line whose first non-blank
/// character is `#`, or a `#` followed by whitespace; `#f50076` is a color.
fn strip_comment(line: &str) -> &str {
    if line.trim_start().starts_with('#') {
        return "";
    }
    let bytes = line.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'#' && bytes.get(i + 1).map_or(true, u8::is_ascii_whitespace) {
            return &line[..i];
        }
    }
    line
}

pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = strip_comment(line);
    let args: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, rest)) = args.split_first() else {
        return Ok(None);
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "tool" => {
            let arg = rest.first().ok_or_else(|| anyhow!("tool needs a name"))?;
            Command::Tool(arg.parse().map_err(|e: String| anyhow!(e))?)
        }
        "color" => {
            let arg = rest.first().ok_or_else(|| anyhow!("color needs a value"))?;
            Command::Color(parse_color(arg)?)
        }
        "click" => Command::Click(parse_number(rest, 0)?, parse_number(rest, 1)?),
        "cell" => Command::Cell(GridPosition::new(parse_number(rest, 0)?, parse_number(rest, 1)?)),
        "resolution" => Command::Resolution(parse_number(rest, 0)?),
        "clear" => Command::Clear,
        "resize" => {
            let size: u32 = parse_number(rest, 0)?;
            if size == 0 || size > MAX_SURFACE_SIZE {
                bail!("resize needs 1..={MAX_SURFACE_SIZE} pixels, got {size}");
            }
            Command::Resize(size)
        }
        other => bail!("unknown command '{other}'"),
    };
    Ok(Some(command))
}

/// Parses a whole script, reporting errors with their line number.
pub fn parse_script(text: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(command) = parse_line(line).with_context(|| format!("line {}: '{}'", i + 1, line.trim()))? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Feeds one command to the controller the way a UI event would.
pub fn apply<S: RenderSurface>(controller: &mut CanvasController<S>, command: Command, gate: &mut impl ConfirmGate) {
    match command {
        Command::Tool(action) => controller.on_toolbar_action(action),
        Command::Color(color) => controller.on_color_select(color),
        Command::Click(x, y) => {
            controller.on_click(x, y);
        }
        Command::Cell(pos) => {
            // click the cell's center, like a user would
            let Some(cell) = controller.grid().get(pos) else {
                log::warn!("cell {pos} is outside the {0}x{0} grid", controller.grid().resolution());
                return;
            };
            let half = cell.width / 2.0;
            let (x, y) = (cell.pos_x + half, cell.pos_y + half);
            controller.on_click(x, y);
        }
        Command::Resolution(resolution) => {
            if !controller.on_resolution_select(resolution, gate) {
                log::warn!("grid stays at {0}x{0} (offered: {1:?})", controller.grid().resolution(), controller.resolutions());
            }
        }
        Command::Clear => controller.on_clear(),
        Command::Resize(size) => controller.on_resize(size),
    }
}
