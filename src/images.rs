/// Map a player's image key to its bundled portrait asset path.
///
/// Keys outside the table have no portrait; callers render a placeholder.
pub fn portrait_path(key: &str) -> Option<&'static str> {
    match key {
        "karde" => Some("assets/img/karde.png"),
        "veho" => Some("assets/img/veho.png"),
        "miszu" => Some("assets/img/miszu.png"),
        "snejk" => Some("assets/img/snejk.png"),
        "arctiq" => Some("assets/img/arctiq.png"),
        "halvar" => Some("assets/img/halvar.png"),
        "piru" => Some("assets/img/piru.png"),
        "oxide" => Some("assets/img/oxide.png"),
        "dzeno" => Some("assets/img/dzeno.png"),
        "relish" => Some("assets/img/relish.png"),
        "mntra" => Some("assets/img/mntra.png"),
        "lumen" => Some("assets/img/lumen.png"),
        "havoc" => Some("assets/img/havoc.png"),
        "sparrow" => Some("assets/img/sparrow.png"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn every_bundled_player_has_a_portrait() {
        let players = dataset::load().unwrap();
        for p in &players {
            assert!(portrait_path(&p.img).is_some(), "no portrait for {}", p.nickname);
        }
    }

    #[test]
    fn unknown_key_has_no_portrait() {
        assert_eq!(portrait_path("ghost"), None);
    }
}
