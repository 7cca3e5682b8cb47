use pixel_engine_edit::{
    AlwaysConfirm, CanvasController, Color, EditorSettings, EngineError, GridPosition, ImageFormat, MAX_SURFACE_SIZE, NeverConfirm, RenderSurface,
    RgbaSurface, Tool, ToolbarAction,
};
use pretty_assertions::assert_eq;

const RED: Color = Color::new(0xFF, 0, 0);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn controller(resolution: usize, size: u32) -> CanvasController<RgbaSurface> {
    init_logging();
    let settings = EditorSettings {
        resolution,
        surface_size: size,
        ..Default::default()
    };
    CanvasController::new(RgbaSurface::new(size, size).unwrap(), &settings).unwrap()
}

fn colors(controller: &CanvasController<RgbaSurface>) -> Vec<Vec<Color>> {
    controller.grid().rows().iter().map(|row| row.iter().map(|cell| cell.fill_color).collect()).collect()
}

/// Surface that can't be created by `RgbaSurface::new`.
struct EmptySurface;

impl RenderSurface for EmptySurface {
    fn width(&self) -> u32 {
        0
    }
    fn height(&self) -> u32 {
        0
    }
    fn resize(&mut self, _width: u32, _height: u32) {}
    fn fill_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32, _color: Color) {}
    fn stroke_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32, _color: Color) {}
    fn read_pixels(&self, _x: u32, _y: u32, width: u32, height: u32) -> pixel_engine_edit::PixelBuffer {
        pixel_engine_edit::PixelBuffer::blank(width, height)
    }
    fn write_pixels(&mut self, _buffer: &pixel_engine_edit::PixelBuffer, _x: u32, _y: u32) {}
    fn encode_image(&self, _format: ImageFormat) -> pixel_engine_edit::Result<Vec<u8>> {
        Ok(Vec::new())
    }
}

#[test]
fn test_unavailable_surface_fails_at_start() {
    let result = CanvasController::new(EmptySurface, &EditorSettings::default());
    assert!(matches!(result, Err(EngineError::SurfaceUnavailable { .. })));
}

#[test]
fn test_defaults() {
    let controller = controller(8, 512);
    assert_eq!(controller.selected_tool(), Tool::Pencil);
    assert_eq!(controller.selected_color(), Color::BLACK);
    assert_eq!(controller.grid().resolution(), 8);
    assert_eq!(controller.grid().cell_width(), 64.0);
}

#[test]
fn test_pencil_then_bucket() {
    let mut controller = controller(3, 300);
    let white = Color::from_hex("#FFF").unwrap();

    controller.on_tool_select(Tool::Pencil);
    controller.on_color_select(Color::from_hex("#000").unwrap());
    assert_eq!(controller.on_click(150.0, 150.0), Some(GridPosition::new(1, 1)));
    assert_eq!(
        colors(&controller),
        vec![vec![white, white, white], vec![white, Color::BLACK, white], vec![white, white, white]]
    );

    controller.on_tool_select(Tool::Bucket);
    controller.on_color_select(Color::from_hex("#F00").unwrap());
    assert_eq!(controller.on_click(10.0, 10.0), Some(GridPosition::new(0, 0)));
    assert_eq!(colors(&controller), vec![vec![RED, RED, RED], vec![RED, Color::BLACK, RED], vec![RED, RED, RED]]);
}

#[test]
fn test_click_outside_grid_is_ignored() {
    let mut controller = controller(3, 300);
    let before = colors(&controller);
    assert_eq!(controller.on_click(300.0, 20.0), None);
    assert_eq!(controller.on_click(-5.0, -5.0), None);
    assert_eq!(colors(&controller), before);
}

#[test]
fn test_click_repaints_surface() {
    let mut controller = controller(4, 40);
    controller.on_color_select(RED);
    controller.on_click(15.0, 25.0);
    // cell (2, 1) covers pixels 10..20 x 20..30, outline included
    assert_eq!(controller.surface().pixel(15, 25), Some(RED));
    assert_eq!(controller.surface().pixel(10, 20), Some(Color::BLACK));
    assert_eq!(controller.surface().pixel(5, 5), Some(Color::WHITE));
}

#[test]
fn test_resolution_change_declined() {
    let mut controller = controller(3, 300);
    controller.on_click(150.0, 150.0);
    let before = colors(&controller);

    assert!(!controller.on_resolution_select(16, &mut NeverConfirm));
    assert_eq!(controller.grid().resolution(), 3);
    assert_eq!(colors(&controller), before);
}

#[test]
fn test_resolution_change_accepted() {
    let mut controller = controller(3, 300);
    controller.on_click(150.0, 150.0);

    assert!(controller.on_resolution_select(16, &mut AlwaysConfirm));
    assert_eq!(controller.grid().resolution(), 16);
    assert!(controller.grid().cells().all(|(_, cell)| cell.fill_color == Color::WHITE));
}

#[test]
fn test_resolution_off_the_list_is_refused_without_asking() {
    let mut controller = controller(8, 64);
    controller.on_click(10.0, 10.0);
    let before = colors(&controller);
    let asked = std::cell::Cell::new(0);
    let mut gate = |_: &str| {
        asked.set(asked.get() + 1);
        true
    };

    assert_eq!(controller.resolutions(), &[8, 16, 32, 64]);
    assert!(!controller.on_resolution_select(1000, &mut gate));
    assert!(!controller.on_resolution_select(12, &mut gate));
    assert_eq!(asked.get(), 0);
    assert_eq!(controller.grid().resolution(), 8);
    assert_eq!(colors(&controller), before);

    assert!(controller.on_resolution_select(32, &mut gate));
    assert_eq!(asked.get(), 1);
}

#[test]
fn test_resolutions_come_from_settings() {
    let settings = EditorSettings {
        resolution: 4,
        resolutions: vec![4, 12],
        ..Default::default()
    };
    let mut controller = CanvasController::new(RgbaSurface::new(48, 48).unwrap(), &settings).unwrap();
    assert!(!controller.on_resolution_select(16, &mut AlwaysConfirm));
    assert!(controller.on_resolution_select(12, &mut AlwaysConfirm));
    assert_eq!(controller.grid().cell_width(), 4.0);

    // an empty list falls back to the defaults
    let settings = EditorSettings {
        resolutions: Vec::new(),
        ..Default::default()
    };
    let controller = CanvasController::new(RgbaSurface::new(64, 64).unwrap(), &settings).unwrap();
    assert_eq!(controller.resolutions(), &[8, 16, 32, 64]);
}

#[test]
fn test_clear_is_not_gated() {
    let mut controller = controller(3, 300);
    controller.on_click(150.0, 150.0);
    controller.on_toolbar_action(ToolbarAction::Clear);
    assert!(controller.grid().cells().all(|(_, cell)| cell.fill_color == Color::WHITE));
    assert_eq!(controller.grid().resolution(), 3);
}

#[test]
fn test_resize_keeps_drawing() {
    let mut controller = controller(4, 400);
    controller.on_color_select(RED);
    controller.on_click(150.0, 250.0);
    assert_eq!(controller.grid().fill_color((2, 1)), Some(RED));

    controller.on_resize(200);

    assert_eq!(controller.surface().width(), 200);
    assert_eq!(controller.grid().surface_size(), 200.0);
    assert_eq!(controller.grid().fill_color((2, 1)), Some(RED));
    assert_eq!(controller.surface().pixel(75, 125), Some(RED));
    // clicks now use the new geometry
    assert_eq!(controller.on_click(75.0, 125.0), Some(GridPosition::new(2, 1)));
}

#[test]
fn test_resize_beyond_limit_is_ignored() {
    let mut controller = controller(4, 40);
    controller.on_resize(MAX_SURFACE_SIZE + 1);
    controller.on_resize(0);
    assert_eq!((controller.surface().width(), controller.surface().height()), (40, 40));
    assert_eq!(controller.grid().surface_size(), 40.0);
}

#[test]
fn test_non_square_surface_is_squared() {
    init_logging();
    let settings = EditorSettings {
        resolution: 4,
        ..Default::default()
    };
    let mut controller = CanvasController::new(RgbaSurface::new(60, 40).unwrap(), &settings).unwrap();
    assert_eq!((controller.surface().width(), controller.surface().height()), (40, 40));
    assert_eq!(controller.grid().surface_size(), 40.0);

    let buffer = controller.export_buffer();
    assert_eq!((buffer.width(), buffer.height()), (40, 40));
    for y in 0..40 {
        for x in 0..40 {
            assert_eq!(buffer.get(x, y), Some(Color::WHITE), "pixel ({x}, {y})");
        }
    }
}

#[test]
fn test_export_buffer_has_no_grid_lines() {
    let mut controller = controller(4, 40);
    controller.on_color_select(RED);
    controller.on_click(15.0, 25.0);

    let buffer = controller.export_buffer();
    assert_eq!((buffer.width(), buffer.height()), (40, 40));
    assert_eq!(buffer.get(10, 20), Some(RED));
    assert_eq!(buffer.get(0, 0), Some(Color::WHITE));
    assert_eq!(buffer.get(39, 39), Some(Color::WHITE));

    // the visible surface gets its grid lines back
    assert_eq!(controller.surface().pixel(0, 0), Some(Color::BLACK));
    assert_eq!(controller.surface().pixel(10, 20), Some(Color::BLACK));
}

#[test]
fn test_export_image_png() {
    let mut controller = controller(2, 20);
    controller.on_click(5.0, 5.0);

    let bytes = controller.export_image(ImageFormat::Png).unwrap();
    let data_url = controller.export_data_url(ImageFormat::Png).unwrap();
    assert!(data_url.starts_with("data:image/png;base64,"));
    assert_eq!(&bytes[..4], b"\x89PNG");
}

#[test]
fn test_export_to_file() {
    let mut controller = controller(2, 20);
    controller.on_color_select(RED);
    controller.on_click(15.0, 15.0);

    let path = std::env::temp_dir().join(format!("pixel_engine_edit_export_{}.png", std::process::id()));
    controller.export_to_file(ImageFormat::Png, &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(bytes, ImageFormat::Png.encode(&controller.export_buffer()).unwrap());
}

#[test]
fn test_independent_sessions() {
    let mut first = controller(3, 300);
    let second = controller(3, 300);
    first.on_click(150.0, 150.0);
    first.on_tool_select(Tool::Bucket);

    assert_eq!(second.grid().fill_color((1, 1)), Some(Color::WHITE));
    assert_eq!(second.selected_tool(), Tool::Pencil);
}

#[test]
fn test_settings_from_toml() {
    let settings: EditorSettings = toml::from_str(
        r##"
resolution = 16
selected_color = "#F50076"
tool = "bucket"
"##,
    )
    .unwrap();
    assert_eq!(settings.resolution, 16);
    assert_eq!(settings.selected_color, Color::new(0xF5, 0x00, 0x76));
    assert_eq!(settings.tool, Tool::Bucket);
    assert_eq!(settings.surface_size, 512);
    assert_eq!(settings.grid_line_color, Color::BLACK);

    let text = toml::to_string(&settings).unwrap();
    assert_eq!(toml::from_str::<EditorSettings>(&text).unwrap(), settings);
}
