// Example: the full widget loop with hover pauses and animated arrow clicks.
use carousel::{CarouselOptions, ManualDirection};
use carousel_adapter::{Controller, FrameTask};

fn main() {
    let mut c = Controller::new(CarouselOptions::new(4, |_| 200));
    c.on_viewport_width(1200);
    let (task, handle) = FrameTask::new();

    let mut now_ms = 0u64;
    for frame in 0..240u32 {
        now_ms += 16;

        // Scripted interaction: hover at frame 60, click "right" at 70,
        // release at 150, tear the widget down at 200.
        match frame {
            60 => c.on_pointer_enter(),
            70 => {
                let target = c.scroll(ManualDirection::Right, now_ms);
                println!("frame {frame}: scroll right -> target {target}");
            }
            150 => c.on_pointer_leave(),
            200 => handle.cancel(),
            _ => {}
        }

        match task.step(&mut c, now_ms) {
            Some(offset) => {
                if frame % 40 == 0 {
                    println!("frame {frame}: offset {offset}");
                }
            }
            None => {
                println!("frame {frame}: loop cancelled");
                break;
            }
        }
    }
}
