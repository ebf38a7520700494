use cgmath::Deg;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reactive_avoidance::math::{forward_of, Point2d};
use reactive_avoidance::{
    evaluate_safety, AvoidanceConfig, AvoidanceController, DangerVector, NavigationSink, Pose,
    Waypoint,
};

/// Minimal kinematic stand-in for the pose estimator and the actuation layer.
struct SimVehicle {
    position: Point2d,
    heading: Deg<f64>,
    goal: Point2d,
    trajectory: Point2d,
}

impl SimVehicle {
    fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            heading: self.heading,
        }
    }
}

impl NavigationSink for SimVehicle {
    fn move_waypoint_forward(&mut self, waypoint: Waypoint, distance: f64) {
        let target = forward_of(self.position, self.heading, distance);
        match waypoint {
            Waypoint::Goal => self.goal = target,
            Waypoint::Trajectory => self.trajectory = target,
        }
    }

    fn set_waypoint_here(&mut self, waypoint: Waypoint) {
        match waypoint {
            Waypoint::Goal => self.goal = self.position,
            Waypoint::Trajectory => self.trajectory = self.position,
        }
    }

    fn set_heading_target(&mut self, _waypoint: Waypoint) {
        // Waypoints are always projected dead ahead here, so the heading
        // already points at the goal.
    }

    fn set_heading(&mut self, heading: Deg<f64>) {
        self.heading = heading;
    }
}

fn main() {
    let mut vehicle = SimVehicle {
        position: Point2d::new(0.0, 0.0),
        heading: Deg(0.0),
        goal: Point2d::new(0.0, 0.0),
        trajectory: Point2d::new(0.0, 0.0),
    };
    let mut controller =
        AvoidanceController::new(AvoidanceConfig::default(), StdRng::seed_from_u64(42)).unwrap();

    // A corridor with a wall part-way along: clear readings at first, then a
    // blocked forward window until the vehicle has turned away, then clear.
    let script: &[&[u8]] = &[
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
        &[0, 0, 1, 0, 0],
        &[0, 1, 4, 2, 0],
        &[1, 2, 5, 4, 0],
        &[1, 4, 5, 3, 0],
        &[2, 5, 3, 1, 0],
        &[1, 2, 1, 0, 0],
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
    ];

    println!("tick  danger           safe  conf  position           heading");
    for (tick, scores) in script.iter().enumerate() {
        let danger = DangerVector::new(scores).unwrap();
        let safe = evaluate_safety(&danger, controller.config().safety_threshold);
        let pose = vehicle.pose();
        controller.cycle(&danger, &pose, &mut vehicle);
        // Assume the vehicle reaches its goal waypoint before the next tick.
        vehicle.position = vehicle.goal;
        println!(
            "{:>4}  {:?}  {:>5}  {:>4}  ({:>6.2}, {:>6.2})  {:>7.2}",
            tick,
            scores,
            safe,
            controller.confidence(),
            vehicle.position.x,
            vehicle.position.y,
            vehicle.heading.0,
        );
    }
    println!(
        "final goal ({:.2}, {:.2}), trajectory ({:.2}, {:.2})",
        vehicle.goal.x, vehicle.goal.y, vehicle.trajectory.x, vehicle.trajectory.y
    );
}
