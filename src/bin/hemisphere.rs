extern crate quatrot;

use quatrot::walk::hemisphere_layout;
use vector3d::Vector3d;

fn main() {
    println!("Hemisphere sensor layout");
    println!(" Roll(X) Pitch(Y)   Yaw(Z)   (W, X, Y, Z)                     facing");
    let forward = Vector3d::new(1.0, 0.0, 0.0);
    for (deg, q) in hemisphere_layout() {
        let facing = q.rotate(forward);
        let (angle, axis) = q.to_axis_angle();
        println!(
            "{:8.3} {:8.3} {:8.3}   {}   ({:7.3}, {:7.3}, {:7.3})  {:7.3} rad about ({:.3}, {:.3}, {:.3})",
            deg.x, deg.y, deg.z, q, facing.x, facing.y, facing.z, angle, axis.x, axis.y, axis.z
        );
    }
}
