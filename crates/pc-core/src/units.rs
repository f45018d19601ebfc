// pc-core/src/units.rs

use uom::si::f64::Pressure as UomPressure;

pub type Pressure = UomPressure;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn kpa(v: f64) -> Pressure {
    use uom::si::pressure::kilopascal;
    Pressure::new::<kilopascal>(v)
}

#[inline]
pub fn mpa(v: f64) -> Pressure {
    use uom::si::pressure::megapascal;
    Pressure::new::<megapascal>(v)
}

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn psi(v: f64) -> Pressure {
    use uom::si::pressure::pound_force_per_square_inch;
    Pressure::new::<pound_force_per_square_inch>(v)
}

#[inline]
pub fn atm(v: f64) -> Pressure {
    use uom::si::pressure::atmosphere;
    Pressure::new::<atmosphere>(v)
}

/// Express a pressure in the reference table's native unit (MPa).
#[inline]
pub fn to_table_unit(p: Pressure) -> f64 {
    use uom::si::pressure::megapascal;
    p.get::<megapascal>()
}

/// Pressure units accepted as a suffix on raw pressure text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureUnit {
    Pascal,
    Kilopascal,
    Megapascal,
    Bar,
    Psi,
    Atmosphere,
}

impl PressureUnit {
    /// Match a unit tag case-insensitively. Returns `None` for unknown tags.
    ///
    /// Plain "psi" is not accepted; the table holds absolute pressures.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "pa" => Some(Self::Pascal),
            "kpa" => Some(Self::Kilopascal),
            "mpa" => Some(Self::Megapascal),
            "bar" | "bara" => Some(Self::Bar),
            "psia" => Some(Self::Psi),
            "atm" => Some(Self::Atmosphere),
            _ => None,
        }
    }

    pub fn quantity(self, v: f64) -> Pressure {
        match self {
            Self::Pascal => pa(v),
            Self::Kilopascal => kpa(v),
            Self::Megapascal => mpa(v),
            Self::Bar => bar(v),
            Self::Psi => psi(v),
            Self::Atmosphere => atm(v),
        }
    }
}
