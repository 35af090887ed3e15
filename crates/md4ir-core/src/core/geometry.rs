use nalgebra::{Point3, Vector3};

const DEGENERATE_LENGTH: f64 = 1e-12;

pub fn bond_length(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (a - b).norm()
}

/// Angle a-vertex-c in degrees, in `[0, 180]`.
///
/// Returns `None` when either arm has zero length, since the angle is undefined there.
pub fn bond_angle(a: &Point3<f64>, vertex: &Point3<f64>, c: &Point3<f64>) -> Option<f64> {
    let v1 = a - vertex;
    let v2 = c - vertex;
    let (n1, n2) = (v1.norm(), v2.norm());
    if n1 < DEGENERATE_LENGTH || n2 < DEGENERATE_LENGTH {
        return None;
    }
    let cos = (v1.dot(&v2) / (n1 * n2)).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Signed dihedral angle a-b-c-d in degrees, in `(-180, 180]`.
///
/// The outer bonds are projected onto the plane perpendicular to the central bond b→c and
/// the angle is `atan2((n × p1)·p3, p1·p3)` with `n` the unit central bond. With
/// `a = (1,0,0)`, `b = (0,0,0)`, `c = (0,0,1)`, `d = (0,1,1)` the result is `+90`.
///
/// Returns `None` when the central bond has zero length.
pub fn dihedral_angle(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    d: &Point3<f64>,
) -> Option<f64> {
    let b1 = a - b;
    let central = c - b;
    let b3 = d - c;

    let length = central.norm();
    if length < DEGENERATE_LENGTH {
        return None;
    }
    let n = central / length;

    let p1 = b1 - n * b1.dot(&n);
    let p3 = b3 - n * b3.dot(&n);
    let x = p1.dot(&p3);
    let y = n.cross(&p1).dot(&p3);

    let angle = y.atan2(x).to_degrees();
    Some(if angle <= -180.0 { angle + 360.0 } else { angle })
}

pub fn midpoint(a: &Point3<f64>, b: &Point3<f64>) -> Point3<f64> {
    a + (b - a) / 2.0
}

/// Charge-weighted sum of positions. Pairs beyond the shorter of the two slices are ignored;
/// callers check that charges and atoms line up.
pub fn dipole_moment(charges: &[f64], positions: &[Point3<f64>]) -> Vector3<f64> {
    charges
        .iter()
        .zip(positions)
        .fold(Vector3::zeros(), |acc, (q, p)| acc + p.coords * *q)
}
