use super::view::ViewState;
use crate::camera::PerspectiveMode;

/// Status readout for the 2D pass: the mode title, the camera parameters of
/// the active mode, and the cursor position.
#[must_use]
pub fn hud_lines(state: &ViewState) -> Vec<String> {
    let camera = state.camera();
    let mut lines = vec![state.mode().to_string()];
    match state.mode() {
        PerspectiveMode::Orthographic => {
            let w = camera.ortho_window;
            let mouse = state.mouse_world();
            lines.push(format!(
                "X:{:.1}, Y:{:.1}, W:{:.1}, H:{:.1}",
                w.x, w.y, w.width, w.height
            ));
            lines.push(format!("MOUSE WORLD ({:.2}, {:.2})", mouse.x, mouse.y));
        }
        PerspectiveMode::FirstPerson | PerspectiveMode::Polar => {
            let h = camera.horizon;
            let o = camera.origin;
            lines.push(format!(
                "LOOK AZ:{:.2}, ALT:{:.2}, ZOOM:{:.2}",
                h.azimuth, h.altitude, h.distance
            ));
            lines.push(format!(
                "ORIGIN X:{:.2}, Y:{:.2}, Z:{:.2}",
                o.x, o.y, o.z
            ));
        }
    }
    let mouse = state.input().mouse_position();
    lines.push(format!(
        "MOUSE SCREEN ({}, {})",
        mouse.x as i32, mouse.y as i32
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perspective_readout() {
        let state = ViewState::default();
        assert_eq!(
            hud_lines(&state),
            vec![
                "First Person Perspective",
                "LOOK AZ:0.00, ALT:0.00, ZOOM:7.00",
                "ORIGIN X:0.00, Y:0.00, Z:0.00",
                "MOUSE SCREEN (0, 0)",
            ]
        );
    }

    #[test]
    fn orthographic_readout_maps_mouse_to_world() {
        let mut state = ViewState::default();
        let _ = state.set_mode(PerspectiveMode::Orthographic);
        let _ = state.input_mut().move_mouse(glam::Vec2::new(800.0, 0.0));
        let lines = hud_lines(&state);
        assert_eq!(lines[0], "Orthographic Perspective");
        assert_eq!(lines[1], "X:-8.0, Y:-6.0, W:16.0, H:12.0");
        assert_eq!(lines[2], "MOUSE WORLD (8.00, -6.00)");
        assert_eq!(lines[3], "MOUSE SCREEN (800, 0)");
    }
}
