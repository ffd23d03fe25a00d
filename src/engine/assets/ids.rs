// Dense identifiers for every asset the game ships

use enum_map::Enum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum ImageId {
    HullViper,
    HullScout,
    HullHunter,
    HullFighter,
    HullScorpion,
    HullMammoth,
    TurretBuilder,
    TurretGatlingGun,
    TurretLightCannon,
    TurretDualCannon,
    TurretHeavyCannon,
    TurretRailgun,
    TurretLancer,
    TurretGauss,
    TurretIon,
    BattlePost,
    AmmoGatlingGun,
    AmmoMediumCannon,
    AmmoDualCannon,
    AmmoLancer,
    AmmoGauss,
    AmmoIon,
    Explosion,
    BackgroundTiles,
    SectorSelector,
    UnitSelector,
    Grid,
    IronResourceIcon,
    GoldResourceIcon,
    OilResourceIcon,
    CombinedResourceIcon,
    ResourceRow,
    PopupBuildTank,
    MenuBackground,
    MenuButton,
    MenuSelectButton,
    MenuCheckboxButton,
    MenuSlideLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum AudioId {
    GatlingGun,
    LightCannon,
    DualCannon,
    HeavyCannon,
    Railgun,
    Lancer,
    Gauss,
    Ion,
    Music,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum FontId {
    Small,
    Description,
    Big,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum RawId {
    TilesJson,
}
