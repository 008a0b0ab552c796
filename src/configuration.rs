pub trait Configuration: Clone + Send + Sync + 'static {
    fn port(&self) -> String;
    /// Weekly opening hours, Monday through Sunday.
    fn weekly_hours(&self) -> [String; 7];
}
