use crate::models::{Output, Workspace};

/// Active outputs, left to right. Their position is the output index used by the
/// workspace numbering.
#[must_use]
pub fn ordered_outputs(outputs: &[Output]) -> Vec<&Output> {
    let mut active: Vec<&Output> = outputs.iter().filter(|o| o.is_active).collect();
    active.sort_by_key(|o| o.rect.x);
    active
}

/// Names of [`ordered_outputs`].
#[must_use]
pub fn ordered_output_names(outputs: &[Output]) -> Vec<String> {
    ordered_outputs(outputs)
        .into_iter()
        .map(|o| o.name.clone())
        .collect()
}

/// Output holding the workspace numbered `num`.
#[must_use]
pub fn workspace_output(workspaces: &[Workspace], num: i32) -> Option<&str> {
    workspaces
        .iter()
        .find(|ws| ws.num == Some(num))
        .map(|ws| ws.output.as_str())
}

/// Output holding the focused workspace.
#[must_use]
pub fn focused_output(workspaces: &[Workspace]) -> Option<&str> {
    workspaces
        .iter()
        .find(|ws| ws.is_focused)
        .map(|ws| ws.output.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rect;

    #[test]
    fn orders_active_outputs_by_x() {
        let mut disabled = Output::new("DP-2", Rect::new(-1920, 0, 1920, 1080));
        disabled.is_active = false;
        let outputs = vec![
            Output::new("HDMI-1", Rect::new(1920, 0, 2560, 1440)),
            disabled,
            Output::new("eDP-1", Rect::new(0, 0, 1920, 1080)),
        ];
        assert_eq!(ordered_output_names(&outputs), vec!["eDP-1", "HDMI-1"]);
    }

    #[test]
    fn parses_get_outputs_reply() {
        let json = r#"[
            {"name": "xroot-0", "active": false, "primary": false, "rect": {"x": 0, "y": 0, "width": 4480, "height": 1440}, "current_workspace": null},
            {"name": "HDMI-1", "active": true, "primary": true, "rect": {"x": 1920, "y": 0, "width": 2560, "height": 1440}, "current_workspace": "11"},
            {"name": "eDP-1", "active": true, "primary": false, "rect": {"x": 0, "y": 0, "width": 1920, "height": 1080}, "current_workspace": "1"}
        ]"#;
        let outputs: Vec<Output> = serde_json::from_str(json).unwrap();
        assert_eq!(ordered_output_names(&outputs), vec!["eDP-1", "HDMI-1"]);
        assert_eq!(outputs[1].current_workspace.as_deref(), Some("11"));
    }

    #[test]
    fn finds_workspace_outputs() {
        let mut ws = Workspace::new(2, 11, "HDMI-1");
        ws.is_focused = true;
        let workspaces = vec![Workspace::new(1, 1, "eDP-1"), ws];
        assert_eq!(workspace_output(&workspaces, 1), Some("eDP-1"));
        assert_eq!(workspace_output(&workspaces, 5), None);
        assert_eq!(focused_output(&workspaces), Some("HDMI-1"));
    }
}
