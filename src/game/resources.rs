// Asset tables: every resource the game ships and where it lives

use crate::engine::assets::{
    AssetError, Audio, AudioId, Font, FontId, ImageId, ImageInfo, Loader, Raw, RawId,
};

pub fn audio_resources() -> Vec<(AudioId, Audio)> {
    vec![
        (AudioId::GatlingGun, Audio::new("sounds/gatling_gun.wav").with_volume(-0.5)),
        (AudioId::LightCannon, Audio::new("sounds/light_cannon.wav").with_volume(-0.4)),
        (AudioId::DualCannon, Audio::new("sounds/dual_cannon.wav").with_volume(-0.3)),
        (AudioId::HeavyCannon, Audio::new("sounds/heavy_cannon.wav").with_volume(-0.75)),
        (AudioId::Railgun, Audio::new("sounds/railgun.wav").with_volume(-0.5)),
        (AudioId::Lancer, Audio::new("sounds/lancer.wav").with_volume(-0.75)),
        (AudioId::Gauss, Audio::new("sounds/gauss.wav").with_volume(-0.5)),
        (AudioId::Ion, Audio::new("sounds/ion.wav").with_volume(-0.5)),
        (AudioId::Music, Audio::new("sounds/music.ogg")),
    ]
}

pub fn image_resources() -> Vec<(ImageId, ImageInfo)> {
    [
        (ImageId::HullViper, "hull_viper.png"),
        (ImageId::HullScout, "hull_scout.png"),
        (ImageId::HullHunter, "hull_hunter.png"),
        (ImageId::HullFighter, "hull_fighter.png"),
        (ImageId::HullScorpion, "hull_scorpion.png"),
        (ImageId::HullMammoth, "hull_mammoth.png"),
        (ImageId::TurretBuilder, "turret_builder.png"),
        (ImageId::TurretGatlingGun, "turret_gatling_gun.png"),
        (ImageId::TurretLightCannon, "turret_light_cannon.png"),
        (ImageId::TurretDualCannon, "turret_dual_cannon.png"),
        (ImageId::TurretHeavyCannon, "turret_heavy_cannon.png"),
        (ImageId::TurretRailgun, "turret_railgun.png"),
        (ImageId::TurretLancer, "turret_lancer.png"),
        (ImageId::TurretGauss, "turret_gauss.png"),
        (ImageId::TurretIon, "turret_ion.png"),
        (ImageId::BattlePost, "battle_post.png"),
        (ImageId::AmmoGatlingGun, "ammo_gatling_gun.png"),
        (ImageId::AmmoMediumCannon, "ammo_medium_cannon.png"),
        (ImageId::AmmoDualCannon, "ammo_dual_cannon.png"),
        (ImageId::AmmoLancer, "ammo_lancer.png"),
        (ImageId::AmmoGauss, "ammo_gauss.png"),
        (ImageId::AmmoIon, "ammo_ion.png"),
        (ImageId::Explosion, "explosion.png"),
        (ImageId::BackgroundTiles, "tiles.png"),
        (ImageId::SectorSelector, "sector_selector.png"),
        (ImageId::UnitSelector, "unit_selector.png"),
        (ImageId::Grid, "grid.png"),
        (ImageId::IronResourceIcon, "resource_iron.png"),
        (ImageId::GoldResourceIcon, "resource_gold.png"),
        (ImageId::OilResourceIcon, "resource_oil.png"),
        (ImageId::CombinedResourceIcon, "resource_combined.png"),
        (ImageId::ResourceRow, "resource_row.png"),
        (ImageId::PopupBuildTank, "popup_build_tank.png"),
        (ImageId::MenuBackground, "menu_bg.png"),
        (ImageId::MenuButton, "menu_button.png"),
        (ImageId::MenuSelectButton, "menu_select_button.png"),
        (ImageId::MenuCheckboxButton, "menu_checkbox_button.png"),
        (ImageId::MenuSlideLeft, "menu_slide_left.png"),
    ]
    .into_iter()
    .map(|(id, path)| (id, ImageInfo::new(path)))
    .collect()
}

pub fn font_resources() -> Vec<(FontId, Font)> {
    vec![
        (FontId::Small, Font::new("DejavuSansMono.ttf", 12)),
        (
            FontId::Description,
            Font::new("DejavuSansMono.ttf", 14).with_line_spacing(1.15),
        ),
        (FontId::Big, Font::new("DejavuSansMono.ttf", 20)),
    ]
}

pub fn raw_resources() -> Vec<(RawId, Raw)> {
    vec![(RawId::TilesJson, Raw::new("tiles.json"))]
}

/// Register every resource and preload it
///
/// Stops at the first failure; the loader has already reported it through
/// the critical-error hook.
pub fn register_resources(loader: &mut Loader) -> Result<(), AssetError> {
    for (id, res) in audio_resources() {
        loader.set_audio(id, res);
        loader.preload_audio(id)?;
    }

    for (id, res) in image_resources() {
        loader.set_image(id, res);
        loader.preload_image(id)?;
    }

    for (id, res) in font_resources() {
        loader.set_font(id, res);
        loader.preload_font(id)?;
    }

    for (id, res) in raw_resources() {
        loader.set_raw(id, res);
        loader.preload_raw(id)?;
    }

    loader.log_stats();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use enum_map::Enum;
    use std::collections::HashSet;

    #[test]
    fn test_every_id_has_a_descriptor() {
        let images: HashSet<ImageId> = image_resources().into_iter().map(|(id, _)| id).collect();
        let audio: HashSet<AudioId> = audio_resources().into_iter().map(|(id, _)| id).collect();

        assert_eq!(images.len(), ImageId::LENGTH);
        assert_eq!(image_resources().len(), ImageId::LENGTH);
        assert_eq!(audio.len(), AudioId::LENGTH);
        assert_eq!(font_resources().len(), FontId::LENGTH);
        assert_eq!(raw_resources().len(), RawId::LENGTH);
    }

    #[test]
    fn test_gatling_gun_descriptor() {
        let (_, gatling) = audio_resources()
            .into_iter()
            .find(|(id, _)| *id == AudioId::GatlingGun)
            .unwrap();

        assert_eq!(gatling.path, "sounds/gatling_gun.wav");
        assert_relative_eq!(gatling.volume, -0.5);
    }

    #[test]
    fn test_music_plays_at_full_volume() {
        let (_, music) = audio_resources()
            .into_iter()
            .find(|(id, _)| *id == AudioId::Music)
            .unwrap();

        assert_eq!(music.path, "sounds/music.ogg");
        assert_relative_eq!(music.volume, 0.0);
    }

    #[test]
    fn test_fonts_share_one_file() {
        let fonts = font_resources();
        assert!(fonts.iter().all(|(_, font)| font.path == "DejavuSansMono.ttf"));

        let sizes: Vec<u32> = fonts.iter().map(|(_, font)| font.size).collect();
        assert_eq!(sizes, vec![12, 14, 20]);
        assert_relative_eq!(fonts[1].1.line_spacing, 1.15);
    }

    #[test]
    fn test_paths_are_relative() {
        let paths = image_resources()
            .into_iter()
            .map(|(_, info)| info.path)
            .chain(audio_resources().into_iter().map(|(_, info)| info.path))
            .chain(font_resources().into_iter().map(|(_, info)| info.path))
            .chain(raw_resources().into_iter().map(|(_, info)| info.path));

        for path in paths {
            assert!(!path.starts_with('/'), "{path} must be relative");
            assert!(!path.contains('\\'), "{path} must use forward slashes");
        }
    }
}
