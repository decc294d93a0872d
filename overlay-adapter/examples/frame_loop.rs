use overlay::{DrawerAnchor, DrawerOptions};
use overlay_adapter::{DrawerController, InlineStyle, panel_transform};

fn main() {
    // Example: a host without CSS transitions drives the panel from its own frame loop.
    //
    // An adapter would:
    // - call set_open when its open flag changes
    // - call tick(now_ms) every frame while needs_frame() says so
    // - sleep until next_wakeup_ms() otherwise
    // - write panel_transform(progress) to the panel's inline style
    let opts = DrawerOptions::new()
        .with_anchor(DrawerAnchor::Left)
        .with_close_delay_ms(240);
    let anchor = opts.anchor;
    let mut c = DrawerController::new(opts, InlineStyle::new());
    c.mount(0);

    let mut now_ms = 0u64;
    c.set_open(true, now_ms);
    println!("open: body overflow={:?}", c.drawer().host().get("overflow"));

    while let Some(wake) = c.next_wakeup_ms(now_ms) {
        now_ms = wake.max(now_ms + 16);
        if c.tick(now_ms) {
            println!("t={now_ms} visible={}", c.drawer().is_visible());
        }
        let p = c.progress(now_ms);
        println!("t={now_ms} transform={}", panel_transform(anchor, p));
        if now_ms >= 400 {
            break;
        }
    }

    c.set_open(false, now_ms);
    println!("close: body overflow={:?}", c.drawer().host().get("overflow"));
    while let Some(wake) = c.next_wakeup_ms(now_ms) {
        now_ms = wake.max(now_ms + 16);
        if c.tick(now_ms) {
            println!("t={now_ms} visible={}", c.drawer().is_visible());
        }
        println!(
            "t={now_ms} transform={}",
            panel_transform(anchor, c.progress(now_ms))
        );
    }

    println!("done: overflow writes={:?}", c.drawer().host().overflow_writes());
}
