// Facade: one call that sequences a home theater's devices for movie night.

// =============================================================================
// Subsystem devices
// =============================================================================

struct Amplifier;

impl Amplifier {
    fn on(&self) -> String {
        "Amplifier is turned on\n".to_string()
    }

    fn set_volume(&self, volume: u32) -> String {
        format!("Amplifier volume is set to {volume}\n")
    }
}

struct DvdPlayer;

impl DvdPlayer {
    fn on(&self) -> String {
        "DVD Player is turned on\n".to_string()
    }

    fn play(&self, movie: &str) -> String {
        format!("DVD Player is playing \"{movie}\"\n")
    }
}

struct Projector;

impl Projector {
    fn on(&self) -> String {
        "Projector is turned on\n".to_string()
    }

    fn set_input(&self, input: &str) -> String {
        format!("Projector input is set to {input}\n")
    }
}

// =============================================================================
// Facade
// =============================================================================

struct HomeTheaterFacade {
    amplifier: Amplifier,
    dvd_player: DvdPlayer,
    projector: Projector,
}

impl HomeTheaterFacade {
    fn new(amplifier: Amplifier, dvd_player: DvdPlayer, projector: Projector) -> Self {
        Self {
            amplifier,
            dvd_player,
            projector,
        }
    }

    fn watch_movie(&self, movie: &str) -> String {
        self.amplifier.on()
            + &self.amplifier.set_volume(10)
            + &self.dvd_player.on()
            + &self.dvd_player.play(movie)
            + &self.projector.on()
            + &self.projector.set_input("DVD")
    }
}

fn main() {
    let home_theater = HomeTheaterFacade::new(Amplifier, DvdPlayer, Projector);
    println!("{}", home_theater.watch_movie("Star Wars: A New Hope"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_movie_sequences_every_device() {
        let home_theater = HomeTheaterFacade::new(Amplifier, DvdPlayer, Projector);
        assert_eq!(
            home_theater.watch_movie("Star Wars: A New Hope"),
            "Amplifier is turned on\n\
             Amplifier volume is set to 10\n\
             DVD Player is turned on\n\
             DVD Player is playing \"Star Wars: A New Hope\"\n\
             Projector is turned on\n\
             Projector input is set to DVD\n"
        );
    }

    #[test]
    fn test_the_movie_title_flows_through() {
        let home_theater = HomeTheaterFacade::new(Amplifier, DvdPlayer, Projector);
        let transcript = home_theater.watch_movie("Spirited Away");
        assert!(transcript.contains("playing \"Spirited Away\""));
    }

    #[test]
    fn test_devices_still_work_standalone() {
        assert_eq!(Amplifier.set_volume(3), "Amplifier volume is set to 3\n");
        assert_eq!(Projector.set_input("HDMI"), "Projector input is set to HDMI\n");
    }
}
