//! Zero-sized markers for the dimensions of the quantities used in the calculations

/// A physical dimension, identified by the symbol of its SI unit
pub trait Dimension: Copy + Default + std::fmt::Debug + PartialEq + PartialOrd {
    /// Symbol of the coherent SI unit in which quantities of this dimension are stored
    const SYMBOL: &'static str;
}

macro_rules! dimension {
    ($(#[$meta:meta])* $name:ident => $symbol:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name;

        impl Dimension for $name {
            const SYMBOL: &'static str = $symbol;
        }
    };
}

dimension!(Mass => "kg");
dimension!(Charge => "C");
dimension!(Velocity => "m/s");
dimension!(Energy => "J");
dimension!(Momentum => "kg m/s");
dimension!(Length => "m");
dimension!(Time => "s");
dimension!(Frequency => "Hz");
dimension!(
    /// Magnetic flux density
    MagneticField => "T"
);
dimension!(
    /// Momentum per unit charge, the product of field and bending radius
    MagneticRigidity => "T m"
);
