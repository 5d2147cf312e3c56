/// Side effects requested by the reducer and carried out by the run loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ReloadConfig,
}
