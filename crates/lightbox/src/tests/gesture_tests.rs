use super::*;

use lightbox_geometry::{Point, Vector};

#[test]
fn phases_map_to_intents() {
    let interpreter = GestureInterpreter::new();

    assert_eq!(
        interpreter.intent(&PanEvent::new(PanPhase::Began, Point::new(0.0, -9.0), Vector::ZERO)),
        Intent::Start
    );
    assert_eq!(
        interpreter.intent(&PanEvent::changed(Point::new(12.0, -80.0))),
        Intent::Scrub { translation_y: -80.0 }
    );
    assert_eq!(
        interpreter.intent(&PanEvent::ended(Point::new(3.0, -200.0), Vector::new(10.0, -900.0))),
        Intent::End {
            final_point: Point::new(3.0, -200.0),
            velocity: Vector::new(10.0, -900.0),
        }
    );
}

#[test]
fn cancelled_and_failed_revert() {
    let interpreter = GestureInterpreter::new();
    assert_eq!(
        interpreter.intent(&PanEvent::cancelled(Point::new(0.0, -300.0))),
        Intent::Cancel
    );
    assert_eq!(
        interpreter.intent(&PanEvent::new(PanPhase::Failed, Point::ZERO, Vector::ZERO)),
        Intent::Cancel
    );
}
