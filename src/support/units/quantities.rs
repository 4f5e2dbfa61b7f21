use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, P2, Z0},
};

/// Thermal diffusivity, m²/s in SI.
///
/// Dimensionally `k / (rho * cp)`, so it is obtained directly from the
/// quotient of the corresponding [`uom`] quantities.
pub type ThermalDiffusivity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
