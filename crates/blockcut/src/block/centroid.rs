use nalgebra::Vector3;

use super::Block;

impl Block {
    /// Volume and world-frame centroid via divergence-theorem integration
    /// over the triangulated boundary (spec §4.E.6).
    ///
    /// Each mesh triangle is clockwise in its face's rotated frame; `(t0, t1,
    /// t2)` is read back as `(c, b, a)` to integrate over an anti-clockwise
    /// triangle, matching the outward-normal convention the formula expects.
    pub fn centroid(
        &self,
        vertices: &[Vec<Vector3<f64>>],
        mesh: &[Vec<(usize, usize, usize)>],
    ) -> (f64, Vector3<f64>) {
        let mut volume_acc = 0.0;
        let mut moment = Vector3::zeros();

        for (verts, tris) in vertices.iter().zip(mesh) {
            for &(t0, t1, t2) in tris {
                let c = verts[t0];
                let b = verts[t1];
                let a = verts[t2];
                let n_tri = (b - a).cross(&(c - a));

                volume_acc += a.dot(&n_tri);

                for k in 0..3 {
                    let ab = (a[k] + b[k]).powi(2);
                    let bc = (b[k] + c[k]).powi(2);
                    let ca = (c[k] + a[k]).powi(2);
                    moment[k] += n_tri[k] * (ab + bc + ca) / 24.0;
                }
            }
        }

        let volume = volume_acc / 6.0;
        let centroid_local = moment / (2.0 * volume);
        (volume, centroid_local + self.origin)
    }
}
