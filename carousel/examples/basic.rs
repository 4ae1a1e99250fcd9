// Example: drive the loop headlessly and render which cards are on screen.
use carousel::{Card, Carousel, CarouselOptions};

fn main() {
    let cards = [
        Card {
            title: "The Collection".into(),
            description: "Hand-picked portfolio of luxury cabins.".into(),
            link: "/cabins".into(),
            image: "Cabin/Aspire/1.avif".into(),
            icon: "star".into(),
        },
        Card {
            title: "Comfort & Ease".into(),
            description: "Every detail curated for an effortless stay.".into(),
            link: "/comfort".into(),
            image: "Cabin/Bayview/2.avif".into(),
            icon: "wind".into(),
        },
        Card {
            title: "Gather Together".into(),
            description: "Spaces designed for connection.".into(),
            link: "/gather".into(),
            image: "/Home/Comfort.avif".into(),
            icon: "users".into(),
        },
        Card {
            title: "Explore Nature".into(),
            description: "Trails, lakes and waterfalls minutes away.".into(),
            link: "/beyond".into(),
            image: "/Home/Nature.avif".into(),
            icon: "mountain".into(),
        },
    ];

    // Each card renders 200 px wide; the track holds three copies.
    let mut c = Carousel::new(CarouselOptions::new(cards.len(), |_| 200));
    let viewport = 500u32;

    for frame in 0..1000u32 {
        let r = c.tick();
        if let Some(correction) = r.correction {
            println!("frame {frame}: wrap {correction:?} -> offset {}", r.offset);
        }
        if frame % 250 == 0 {
            print!("frame {frame}: offset {} showing", r.offset);
            c.for_each_visible_slot(viewport, |slot| {
                print!(" [{}]", cards[slot.index].title);
            });
            println!();
        }
    }
}
