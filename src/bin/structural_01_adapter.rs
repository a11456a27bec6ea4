// Adapter: making incompatible interfaces work together. An MP4 player
// behind the media-player interface, and a wild dog sent on a lion hunt.

// =============================================================================
// Media players
// =============================================================================

trait MediaPlayer {
    fn play(&self) -> String;
}

struct Mp3Player;

impl MediaPlayer for Mp3Player {
    fn play(&self) -> String {
        "Playing MP3 file...".to_string()
    }
}

/// Third-party player with an interface our code does not expect.
struct Mp4Player;

impl Mp4Player {
    fn play_mp4(&self) -> String {
        "Playing MP4 file...".to_string()
    }
}

struct Mp4PlayerAdapter {
    player: Mp4Player,
}

impl MediaPlayer for Mp4PlayerAdapter {
    fn play(&self) -> String {
        self.player.play_mp4()
    }
}

// =============================================================================
// Hunting: the hunter only knows how to hunt things that roar
// =============================================================================

trait Lion {
    fn roar(&self) -> String;
}

struct AfricanLion;

impl Lion for AfricanLion {
    fn roar(&self) -> String {
        "african roar".to_string()
    }
}

struct WildDog;

impl WildDog {
    fn bark(&self) -> String {
        "barking".to_string()
    }
}

struct WildDogAdapter {
    dog: WildDog,
}

impl Lion for WildDogAdapter {
    fn roar(&self) -> String {
        self.dog.bark()
    }
}

struct Hunter;

impl Hunter {
    fn hunt(&self, lion: &dyn Lion) -> String {
        format!("hunting, heard: {}", lion.roar())
    }
}

fn main() {
    println!("== Media players ==");
    let players: Vec<Box<dyn MediaPlayer>> = vec![
        Box::new(Mp3Player),
        Box::new(Mp4PlayerAdapter { player: Mp4Player }),
    ];
    for player in &players {
        println!("{}", player.play());
    }

    println!("\n== Hunting ==");
    let hunter = Hunter;
    println!("{}", hunter.hunt(&AfricanLion));
    println!("{}", hunter.hunt(&WildDogAdapter { dog: WildDog }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_player_plays_directly() {
        assert_eq!(Mp3Player.play(), "Playing MP3 file...");
    }

    #[test]
    fn test_adapter_translates_the_foreign_interface() {
        let adapter = Mp4PlayerAdapter { player: Mp4Player };
        assert_eq!(adapter.play(), "Playing MP4 file...");
    }

    #[test]
    fn test_adapted_player_passes_as_a_media_player() {
        let players: Vec<Box<dyn MediaPlayer>> = vec![
            Box::new(Mp3Player),
            Box::new(Mp4PlayerAdapter { player: Mp4Player }),
        ];
        assert_eq!(players.len(), 2);
        for player in players {
            assert!(player.play().starts_with("Playing"));
        }
    }

    #[test]
    fn test_hunter_hunts_real_lions_and_adapted_dogs_alike() {
        let hunter = Hunter;
        assert_eq!(hunter.hunt(&AfricanLion), "hunting, heard: african roar");
        assert_eq!(
            hunter.hunt(&WildDogAdapter { dog: WildDog }),
            "hunting, heard: barking"
        );
    }
}
