use egui::{Color32, PointerButton, Pos2, Rect, pos2, vec2};
use vector_paint::{Canvas, EditorState, GroupId, PaintSettings, Shape, ToolKind};

// Ids 1, 2, 3, ... so group ids are predictable
fn sequential_canvas(settings: PaintSettings) -> Canvas {
    let mut next = 0;
    Canvas::with_id_source(settings, move || {
        next += 1;
        next
    })
}

fn canvas_with_tool(kind: ToolKind) -> Canvas {
    let mut canvas = sequential_canvas(PaintSettings::default());
    canvas.set_active_tool(kind);
    canvas
}

fn drag(canvas: &mut Canvas, from: Pos2, to: &[Pos2]) {
    canvas.on_press(from, PointerButton::Primary).unwrap();
    for point in to {
        canvas.on_drag(*point).unwrap();
    }
    canvas.on_release();
}

fn square_from(end: Pos2) -> Rect {
    let mut canvas = canvas_with_tool(ToolKind::Square);
    drag(&mut canvas, pos2(10.0, 10.0), &[end]);
    match canvas.history().strokes()[0].shape() {
        Shape::Rectangle { rect } => *rect,
        other => panic!("Expected a rectangle, got {other:?}"),
    }
}

#[test]
fn test_square_anchors_at_press_point() {
    let expected = [
        (pos2(2.0, 4.0), Rect::from_min_size(pos2(2.0, 2.0), vec2(8.0, 8.0))),
        (pos2(16.0, 2.0), Rect::from_min_size(pos2(10.0, 2.0), vec2(8.0, 8.0))),
        (pos2(4.0, 13.0), Rect::from_min_size(pos2(4.0, 10.0), vec2(6.0, 6.0))),
        (pos2(13.0, 17.0), Rect::from_min_size(pos2(10.0, 10.0), vec2(7.0, 7.0))),
    ];
    for (end, rect) in expected {
        assert_eq!(square_from(end), rect, "drag to {end:?}");
    }
}

#[test]
fn test_pencil_gesture_is_one_group() {
    let mut canvas = canvas_with_tool(ToolKind::Pencil);
    let path: Vec<Pos2> = (1..=5).map(|i| pos2(i as f32 * 3.0, i as f32)).collect();
    drag(&mut canvas, pos2(0.0, 0.0), &path);

    let strokes = canvas.history().strokes();
    assert_eq!(strokes.len(), 5);
    assert!(strokes.iter().all(|s| s.group_id() == GroupId(1)));

    // Segments chain: each starts where the previous one ended
    for pair in strokes.windows(2) {
        let (Shape::Line { end, .. }, Shape::Line { start, .. }) = (pair[0].shape(), pair[1].shape()) else {
            panic!("Pencil segments must be lines");
        };
        assert_eq!(end, start);
    }

    canvas.undo();
    assert!(canvas.history().is_empty());
    canvas.redo();
    assert_eq!(canvas.history().len(), 5);
}

#[test]
fn test_line_commits_once_on_release() {
    let mut canvas = canvas_with_tool(ToolKind::Line);
    canvas.on_press(pos2(1.0, 1.0), PointerButton::Primary).unwrap();
    canvas.on_drag(pos2(5.0, 5.0)).unwrap();
    canvas.on_drag(pos2(9.0, 3.0)).unwrap();
    assert!(canvas.history().is_empty());
    assert!(matches!(canvas.state(), EditorState::Drawing { .. }));

    canvas.on_release();
    assert_eq!(canvas.state(), EditorState::Idle);
    assert_eq!(
        *canvas.history().strokes()[0].shape(),
        Shape::Line { start: pos2(1.0, 1.0), end: pos2(9.0, 3.0) }
    );
    // The next gesture gets a new id
    assert_eq!(canvas.current_group_id(), GroupId(2));
}

#[test]
fn test_invisible_line_commits_nothing() {
    let mut canvas = canvas_with_tool(ToolKind::Line);
    canvas.set_stroke_width(0).unwrap();
    drag(&mut canvas, pos2(0.0, 0.0), &[pos2(30.0, 30.0)]);
    assert!(canvas.history().is_empty());

    // Fill does not give a line an interior
    canvas.set_fill_enabled(true);
    drag(&mut canvas, pos2(0.0, 0.0), &[pos2(30.0, 30.0)]);
    assert!(canvas.history().is_empty());
}

#[test]
fn test_strokeless_filled_rectangle() {
    let mut canvas = canvas_with_tool(ToolKind::Rectangle);
    canvas.set_stroke_width(0).unwrap();
    canvas.set_fill_enabled(true);
    canvas.set_fill_color(Color32::RED);
    drag(&mut canvas, pos2(20.0, 20.0), &[pos2(5.0, 40.0)]);

    let strokes = canvas.history().strokes();
    assert_eq!(strokes.len(), 1);
    assert!(strokes[0].is_filled());
    assert_eq!(strokes[0].width().get(), 0);
    assert_eq!(strokes[0].fill_color(), Color32::RED);
    assert_eq!(strokes[0].shape().bounds(), Rect::from_min_max(pos2(5.0, 20.0), pos2(20.0, 40.0)));
}

#[test]
fn test_secondary_button_uses_secondary_color() {
    let mut canvas = canvas_with_tool(ToolKind::Ellipse);
    canvas.on_press(pos2(0.0, 0.0), PointerButton::Secondary).unwrap();
    canvas.on_drag(pos2(10.0, 20.0)).unwrap();
    canvas.on_release();
    assert_eq!(canvas.history().strokes()[0].color(), PaintSettings::SECONDARY_COLOR);
}

#[test]
fn test_eraser_paints_background() {
    let mut canvas = canvas_with_tool(ToolKind::Eraser);
    assert!(canvas.is_erase_override());
    drag(&mut canvas, pos2(0.0, 0.0), &[pos2(4.0, 4.0)]);
    assert!(canvas.history().strokes()[0].is_erase_mode());

    canvas.set_background_color(Color32::YELLOW);
    let items = canvas.paintable_sequence();
    assert_eq!(items[0].stroke_color, Color32::YELLOW);
}

#[test]
fn test_preview_only_while_drawing() {
    let mut canvas = canvas_with_tool(ToolKind::Circle);
    assert!(canvas.paintable_sequence().is_empty());

    canvas.on_press(pos2(50.0, 50.0), PointerButton::Primary).unwrap();
    canvas.on_drag(pos2(60.0, 70.0)).unwrap();
    assert_eq!(canvas.paintable_sequence().len(), 1);
    assert!(canvas.history().is_empty());

    canvas.on_release();
    assert_eq!(canvas.paintable_sequence().len(), 1);
    assert_eq!(canvas.history().len(), 1);
}

#[test]
fn test_events_without_press_are_ignored() {
    let mut canvas = canvas_with_tool(ToolKind::Pencil);
    canvas.on_drag(pos2(3.0, 3.0)).unwrap();
    canvas.on_release();
    assert!(canvas.history().is_empty());
    assert_eq!(canvas.current_group_id(), GroupId(1));
}

#[test]
fn test_non_finite_points_are_rejected() {
    let mut canvas = canvas_with_tool(ToolKind::Line);
    assert!(canvas.on_press(pos2(f32::NAN, 0.0), PointerButton::Primary).is_err());
    assert!(canvas.set_stroke_width(21).is_err());
    assert_eq!(canvas.stroke_width().get(), 10);
}
