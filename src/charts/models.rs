use serde::Deserialize;

/// Payload shape of Last.fm `geo.gettoptracks`.
///
/// Error payloads (`{"error":6,"message":...}`) carry no `tracks` member; the
/// defaults let those decode as an empty chart, which callers report as the
/// "no songs found" case.
#[derive(Debug, Default, Deserialize)]
pub struct TopTracksResponse {
    #[serde(default)]
    pub tracks: TrackList,
}

#[derive(Debug, Default, Deserialize)]
pub struct TrackList {
    #[serde(default)]
    pub track: Vec<ChartTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartTrack {
    pub name: String,
    pub artist: ChartArtist,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartArtist {
    pub name: String,
}

/// The highest-ranked chart entry for a country.
#[derive(Debug, Clone, PartialEq)]
pub struct TopTrack {
    pub name: String,
    pub artist: String,
}

#[cfg(test)]
impl ChartTrack {
    pub fn mock(name: &str, artist: &str) -> Self {
        Self {
            name: name.to_string(),
            artist: ChartArtist {
                name: artist.to_string(),
            },
        }
    }
}
