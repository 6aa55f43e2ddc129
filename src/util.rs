use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// The centered rectangle of [`consts::DISPLAY_SIZE`] that everything is
/// drawn inside
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height]).flex(Flex::Center).areas(rect);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        Rect::new(5, 7, 20, 10),
        Size::new(10, 4),
        Rect::new(10, 10, 10, 4)
    )]
    #[case(Rect::new(0, 0, 80, 25), Size::new(80, 25), Rect::new(0, 0, 80, 25))]
    #[case(Rect::new(0, 0, 22, 22), Size::new(22, 22), Rect::new(0, 0, 22, 22))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] centered: Rect) {
        assert_eq!(center_rect(area, size), centered);
    }

    #[rstest]
    #[case(Rect::new(0, 0, 100, 31), Rect::new(10, 3, 80, 25))]
    #[case(Rect::new(0, 0, 80, 25), Rect::new(0, 0, 80, 25))]
    fn test_get_display_area(#[case] area: Rect, #[case] display: Rect) {
        assert_eq!(get_display_area(area), display);
    }
}
