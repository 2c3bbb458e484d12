pub trait CellAutomata {
    fn randomize(&mut self);
    /// Advance by exactly one generation.
    fn update(&mut self);
    fn clear(&mut self);
    fn describe() -> String;
}
