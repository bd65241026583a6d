#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub enum ModalState {
    #[default]
    Hidden, // Carousel is interactive
    Shown,  // Help overlay covers the window and swallows clicks
}
