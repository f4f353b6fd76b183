//! Static page labels per locale. Values come from the renderer; these are
//! the headings and buttons around them.

use nodewatch_domain::locale::Locale;

pub struct Labels {
    pub title: &'static str,
    pub connection: &'static str,
    pub today_tasks: &'static str,
    pub total_tasks: &'static str,
    pub gp_balance: &'static str,
    pub today_gp: &'static str,
    pub total_gp: &'static str,
    pub avg_gp: &'static str,
    pub avg_size: &'static str,
    pub total_size: &'static str,
    pub uptime: &'static str,
    pub last_update: &'static str,
    pub reconnect: &'static str,
    pub refresh: &'static str,
}

pub fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::En => &EN,
        Locale::ZhCn => &ZH_CN,
    }
}

const EN: Labels = Labels {
    title: "Node Dashboard",
    connection: "Connection",
    today_tasks: "Tasks today",
    total_tasks: "Tasks completed",
    gp_balance: "GP balance",
    today_gp: "GP spent today",
    total_gp: "GP spent in total",
    avg_gp: "Avg GP / task",
    avg_size: "Avg size (MiB)",
    total_size: "Total downloaded",
    uptime: "Uptime",
    last_update: "Last update: ",
    reconnect: "Reconnect",
    refresh: "Refresh status",
};

const ZH_CN: Labels = Labels {
    title: "节点面板",
    connection: "连接状态",
    today_tasks: "今日任务",
    total_tasks: "累计任务",
    gp_balance: "GP 余额",
    today_gp: "今日 GP 消耗",
    total_gp: "累计 GP 消耗",
    avg_gp: "平均 GP / 任务",
    avg_size: "平均大小 (MiB)",
    total_size: "累计下载",
    uptime: "运行时间",
    last_update: "最后更新: ",
    reconnect: "重新连接",
    refresh: "刷新状态",
};
