use egui::{self, Color32, FontData, FontDefinitions, FontFamily, FontId, RichText, Stroke, Vec2};
use tracing::{debug, info, warn};

use crate::config::AppearanceConfig;
use crate::message::{MESSAGE, QUIT_LABEL, TITLE};

/// 常见的中文字体位置，cjkuni（AR PL UMing）优先
const CJK_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/arphic/uming.ttc",
    "/usr/share/fonts/cjkuni-uming/uming.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/wqy-microhei/wqy-microhei.ttc",
    "/usr/share/fonts/wqy-zenhei/wqy-zenhei.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
];

const CJK_BOLD_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Bold.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Bold.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Bold.ttc",
    "C:\\Windows\\Fonts\\msyhbd.ttc",
];

/// 退出按钮用的字体族，找不到粗体字体时与常规字体相同
const BOLD_FAMILY: &str = "bold";

const QUIT_FILL: Color32 = Color32::from_rgb(0xDB, 0x70, 0x93);
const MESSAGE_MARGIN: i8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Running,
    Terminated,
}

pub struct StartupErrorApp {
    config: AppearanceConfig,
    state: DialogState,
    /// 上次按内容请求的窗口大小
    fitted_size: Option<Vec2>,
}

impl StartupErrorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppearanceConfig) -> Self {
        // 加载中文字体
        let regular = config
            .font_paths
            .iter()
            .map(String::as_str)
            .chain(CJK_FONT_PATHS.iter().copied());
        cc.egui_ctx
            .set_fonts(build_fonts(regular, CJK_BOLD_FONT_PATHS.iter().copied()));
        Self::with_config(config)
    }

    fn with_config(config: AppearanceConfig) -> Self {
        Self {
            config,
            state: DialogState::Running,
            fitted_size: None,
        }
    }

    /// 退出按钮的处理，重复调用无副作用
    pub fn on_quit_clicked(&mut self) {
        if self.state == DialogState::Terminated {
            return;
        }
        info!("用户点击退出");
        self.state = DialogState::Terminated;
    }

    fn button_height(&self) -> f32 {
        self.config.button_font_size * 2.0
    }

    fn show(&mut self, ctx: &egui::Context) {
        let button_height = self.button_height();

        egui::TopBottomPanel::bottom("quit_panel")
            .show_separator_line(false)
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let quit = egui::Button::new(
                    RichText::new(QUIT_LABEL)
                        .font(FontId::new(
                            self.config.button_font_size,
                            FontFamily::Name(BOLD_FAMILY.into()),
                        ))
                        .color(Color32::BLACK),
                )
                .fill(QUIT_FILL)
                .stroke(Stroke::new(2.0, Color32::from_gray(230)));

                if ui.add_sized([ui.available_width(), button_height], quit).clicked() {
                    self.on_quit_clicked();
                }
            });

        let label_size = egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(Color32::YELLOW)
                    .inner_margin(egui::Margin::same(MESSAGE_MARGIN)),
            )
            .show(ctx, |ui| {
                ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
                    ui.add(
                        egui::Label::new(
                            RichText::new(MESSAGE)
                                .font(FontId::monospace(self.config.message_font_size))
                                .color(Color32::BLACK),
                        )
                        .wrap_mode(egui::TextWrapMode::Extend),
                    )
                    .rect
                    .size()
                })
                .inner
            })
            .inner;

        self.fit_to_content(ctx, label_size);

        if self.state == DialogState::Terminated {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    /// 窗口大小跟随文字（字体加载后尺寸会变），不允许用户拖拽
    fn fit_to_content(&mut self, ctx: &egui::Context, label_size: Vec2) {
        let margin = 2.0 * f32::from(MESSAGE_MARGIN);
        let desired = (label_size + Vec2::splat(margin) + Vec2::new(0.0, self.button_height())).ceil();

        if self.fitted_size.is_none_or(|size| size != desired) {
            debug!("窗口大小调整为 {desired:?}");
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(desired));
            self.fitted_size = Some(desired);
        }
    }
}

fn read_first<'a>(paths: impl IntoIterator<Item = &'a str>) -> Option<(&'a str, Vec<u8>)> {
    paths
        .into_iter()
        .find_map(|path| std::fs::read(path).ok().map(|data| (path, data)))
}

/// 常规中文字体放到两个字体族最前面，另外注册一个粗体族
fn build_fonts<'a>(
    regular: impl IntoIterator<Item = &'a str>,
    bold: impl IntoIterator<Item = &'a str>,
) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();

    if let Some((path, font_data)) = read_first(regular) {
        fonts
            .font_data
            .insert("cjk".to_owned(), FontData::from_owned(font_data).into());

        fonts
            .families
            .entry(FontFamily::Proportional)
            .or_default()
            .insert(0, "cjk".to_owned());
        fonts
            .families
            .entry(FontFamily::Monospace)
            .or_default()
            .insert(0, "cjk".to_owned());

        info!("已加载中文字体: {path}");
    } else {
        warn!("未找到中文字体，提示文字可能无法正常显示");
    }

    let mut bold_family = fonts
        .families
        .get(&FontFamily::Proportional)
        .cloned()
        .unwrap_or_default();
    if let Some((path, font_data)) = read_first(bold) {
        fonts
            .font_data
            .insert("cjk-bold".to_owned(), FontData::from_owned(font_data).into());
        bold_family.insert(0, "cjk-bold".to_owned());
        info!("已加载粗体中文字体: {path}");
    } else {
        debug!("未找到粗体中文字体，退出按钮使用常规字重");
    }
    fonts
        .families
        .insert(FontFamily::Name(BOLD_FAMILY.into()), bold_family);

    fonts
}

impl eframe::App for StartupErrorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

pub fn native_options(config: &AppearanceConfig) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size(config.window_size)
            .with_resizable(false),
        ..Default::default()
    }
}

/// 显示窗口并阻塞在事件循环中，直到点击退出
pub fn launch(config: AppearanceConfig) -> eframe::Result<()> {
    let options = native_options(&config);
    debug!("启动错误提示窗口");

    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(StartupErrorApp::new(cc, config)))),
    )
}
