// Bridge: web pages and themes vary independently; any page renders against
// any theme.

trait Theme {
    fn color(&self) -> &'static str;
}

struct DarkTheme;

impl Theme for DarkTheme {
    fn color(&self) -> &'static str {
        "Dark Theme"
    }
}

struct LightTheme;

impl Theme for LightTheme {
    fn color(&self) -> &'static str {
        "Light Theme"
    }
}

trait WebPage {
    fn content(&self) -> String;
}

struct About {
    theme: Box<dyn Theme>,
}

impl WebPage for About {
    fn content(&self) -> String {
        format!("About in {}", self.theme.color())
    }
}

struct Blog {
    theme: Box<dyn Theme>,
}

impl WebPage for Blog {
    fn content(&self) -> String {
        format!("Blog in {}", self.theme.color())
    }
}

fn main() {
    let about = About {
        theme: Box::new(DarkTheme),
    };
    println!("{}", about.content());

    let blog = Blog {
        theme: Box::new(LightTheme),
    };
    println!("{}", blog.content());

    let blog = Blog {
        theme: Box::new(DarkTheme),
    };
    println!("{}", blog.content());
}
