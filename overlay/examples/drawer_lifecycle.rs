use overlay::{CloseEvent, Drawer, DrawerHost, DrawerOptions, Locale, RenderPlan};

#[derive(Debug, Default)]
struct Body {
    overflow: String,
}

impl DrawerHost for Body {
    fn mount_overflow(&self) -> String {
        self.overflow.clone()
    }

    fn set_mount_overflow(&mut self, value: &str) {
        println!("  body.style.overflow = {value:?}");
        self.overflow = value.to_string();
    }
}

fn describe(plan: &RenderPlan) -> &'static str {
    match plan {
        RenderPlan::Nothing => "nothing",
        RenderPlan::Hidden => "hidden",
        RenderPlan::Layered(_) => "layered",
    }
}

fn main() {
    // A host owns the open flag; the drawer only asks for it to be cleared.
    let opts = DrawerOptions::new().with_on_close(Some(|e: CloseEvent| {
        println!("  on_close({})", e.close_source.as_str());
    }));
    let mut drawer = Drawer::new(opts, Body::default());
    let locale = Locale::default();

    drawer.mount(0);
    println!("t=0 open");
    drawer.set_open(true, 0);
    println!("  phase={:?} render={}", drawer.phase(), describe(&drawer.render(&locale)));

    drawer.frame();
    println!("t=16 frame: phase={:?}", drawer.phase());

    println!("t=200 escape");
    drawer.on_escape();
    drawer.set_open(false, 200);
    println!(
        "  phase={:?} hide_at={:?}",
        drawer.phase(),
        drawer.next_deadline_ms()
    );

    let mut now_ms = 200;
    while drawer.next_deadline_ms().is_some() {
        now_ms += 100;
        if drawer.tick(now_ms) {
            println!("t={now_ms} hidden: phase={:?}", drawer.phase());
        }
    }
    println!("  render={}", describe(&drawer.render(&locale)));
}
