//! Triclinic unit-cell wireframe geometry.
//!
//! Converts six lattice parameters into the 8-vertex / 12-edge parallelepiped
//! skeleton of one crystal repeat unit, in the standard crystallographic
//! frame (vec a along +X, vec b in the XY plane).

pub mod dash;

use glam::DVec3;

use crate::lattice::LatticeParameters;

/// The 12 edges of the parallelepiped, as pairs of vertex indices into
/// [`UnitCellWireframe::vertices`]. The vertex indexing (origin, a, b, c,
/// a+b, a+c, b+c, a+b+c) is fixed; this table depends on it.
pub const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (0, 2),
    (0, 3), // from the origin
    (1, 4),
    (1, 5), // from a
    (2, 4),
    (2, 6), // from b
    (3, 5),
    (3, 6), // from c
    (4, 7),
    (5, 7),
    (6, 7), // to a+b+c
];

/// The three basis vectors of a unit cell in the wireframe's local frame.
///
/// Construction follows the crystallographic convention: `a` along +X, `b`
/// in the XY plane, `c` completing the (generally oblique) frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBasis {
    /// Basis vector along the a edge, `(a, 0, 0)`.
    pub a: DVec3,
    /// Basis vector along the b edge, in the XY plane.
    pub b: DVec3,
    /// Basis vector along the c edge.
    pub c: DVec3,
}

impl CellBasis {
    /// Derive the basis from lattice parameters.
    ///
    /// No degeneracy guard: `sin(gamma) == 0` divides by zero and
    /// geometrically inconsistent angles leave a negative radicand, both of
    /// which flow into the components as non-finite values. Callers check
    /// the resulting wireframe with [`UnitCellWireframe::is_degenerate`]
    /// instead of pre-validating the angles.
    #[must_use]
    pub fn from_lattice(params: &LatticeParameters) -> Self {
        let alpha = params.alpha.to_radians();
        let beta = params.beta.to_radians();
        let gamma = params.gamma.to_radians();

        let a = DVec3::new(params.a, 0.0, 0.0);
        let b = DVec3::new(
            params.b * gamma.cos(),
            params.b * gamma.sin(),
            0.0,
        );

        let cx = params.c * beta.cos();
        let cy = params.c * (alpha.cos() - beta.cos() * gamma.cos())
            / gamma.sin();
        let cz = (params.c * params.c - cx * cx - cy * cy).sqrt();
        let c = DVec3::new(cx, cy, cz);

        Self { a, b, c }
    }
}

/// The 8-vertex, 12-edge parallelepiped skeleton of one unit cell.
///
/// Rebuilt from [`LatticeParameters`] on every show and discarded on hide;
/// never cached. Vertex indices are semantic: 0 origin, 1 a, 2 b, 3 c,
/// 4 a+b, 5 a+c, 6 b+c, 7 a+b+c.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitCellWireframe {
    /// The eight corner points, in the fixed index order above.
    pub vertices: [DVec3; 8],
}

impl UnitCellWireframe {
    /// Build the wireframe for the given lattice parameters.
    #[must_use]
    pub fn from_lattice(params: &LatticeParameters) -> Self {
        let CellBasis { a, b, c } = CellBasis::from_lattice(params);
        Self {
            vertices: [
                DVec3::ZERO,
                a,
                b,
                c,
                a + b,
                a + c,
                b + c,
                a + b + c,
            ],
        }
    }

    /// Whether any vertex has a non-finite component.
    ///
    /// True for the two degenerate constructions: gamma of 0 degrees (a 0/0
    /// in the basis derivation) and angle combinations with no consistent 3D
    /// realization (negative radicand). Gamma of 180 degrees is not caught:
    /// in f64 its sine is tiny but nonzero, so the basis comes out finite
    /// and flat instead. Callers must skip drawing a degenerate
    /// wireframe.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.iter().any(|v| !v.is_finite())
    }

    /// Iterate the 12 edges as `(start, end)` point pairs.
    pub fn edges(&self) -> impl Iterator<Item = (DVec3, DVec3)> + '_ {
        EDGES
            .iter()
            .map(move |&(i, j)| (self.vertices[i], self.vertices[j]))
    }
}
