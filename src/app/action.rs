#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate { url: String },
    Back,
    Forward,
    Refresh,
    Quit,
}
