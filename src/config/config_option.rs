/// A configuration option, with a name and a permitted range of values.
#[derive(Clone, Copy, Debug)]
pub struct ConfigOption<T> {
    /// The name of the option, as used (e.g.) on the command line.
    pub name: &'static str,

    /// The minimum permitted value of the option.
    pub min: T,

    /// The maximum permitted value of the option.
    pub max: T,

    /// The current value of the option.
    pub value: T,
}

impl<T: PartialOrd + Copy> ConfigOption<T> {
    /// The minimum and maximum permitted values of the option.
    pub fn min_max(&self) -> (T, T) {
        (self.min, self.max)
    }
}
